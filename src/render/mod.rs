//! Server-side HTML rendering.
//!
//! Pages are plain semantic HTML built from the catalogs and the locale's
//! string table. Every dynamic value goes through `escape_html`.

mod contact;
mod home;
mod process;
mod projects;
mod studio;

pub use contact::{contact, ContactView};
pub use home::home;
pub use process::process;
pub use projects::{project_detail, projects};
pub use studio::studio;

use chrono::Datelike;

use crate::config::StudioInfo;
use crate::i18n::{Locale, LocaleRegistry, LocaleState};
use crate::routes::Route;

/// Everything a page needs besides its own content.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub locale: LocaleState,
    pub studio: &'a StudioInfo,
    /// Year printed in the footer copyright
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    /// Context for a request whose path carries `locale`.
    pub fn new(locale: Locale, studio: &'a StudioInfo) -> Self {
        let mut state = LocaleState::default();
        state.set(locale);

        Self {
            locale: state,
            studio,
            year: chrono::Utc::now().year(),
        }
    }

    pub fn current(&self) -> Locale {
        self.locale.current()
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Percent-encode a path segment (slugs are ASCII, but user-supplied
/// segments can be anything).
pub fn encode_segment(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char)
            }
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }

    result
}

/// Wrap page content in the shared document shell.
///
/// `route` is the page being rendered; the language switch links to the same
/// route in the other locale. The footer contact block is omitted when
/// `studio` is `None`.
fn document(
    locale: LocaleState,
    route: &Route,
    title: &str,
    body: &str,
    studio: Option<&StudioInfo>,
    year: i32,
) -> String {
    let current = locale.current();
    let strings = current.strings();

    // The language switch points at the same route in the toggled locale
    let mut switched = locale;
    switched.toggle();
    let alternate = switched.current();

    let alternates: String = LocaleRegistry::get()
        .list_enabled()
        .into_iter()
        .filter(|config| config.locale != current)
        .map(|config| {
            format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                config.html_lang,
                escape_html(&route.href(config.locale))
            )
        })
        .collect();

    let nav_links: String = Route::NAVIGATION
        .iter()
        .map(|nav| {
            let active = if nav == route { r#" aria-current="page""# } else { "" };
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                escape_html(&nav.href(current)),
                active,
                escape_html(nav.nav_label(strings))
            )
        })
        .collect();

    let footer_contact = match studio {
        Some(studio) => format!(
            r#"<div class="footer-contact"><h2>{}</h2><p><a href="mailto:{email}">{email}</a></p><p><a href="tel:{tel}">{phone}</a></p></div>"#,
            escape_html(strings.footer_contact),
            email = escape_html(&studio.email),
            tel = escape_html(&studio.phone_href()),
            phone = escape_html(&studio.phone),
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | View Arquitetura</title>
{alternates}
</head>
<body>
<header class="site-header">
<a class="brand" href="{home}">VIEW<span>{tagline}</span></a>
<nav><ul>{nav_links}</ul></nav>
<a class="language-switch" href="{alt_href}" hreflang="{alt_lang}" aria-label="{switch_label}" title="{alt_native}">{alt_code}</a>
</header>
<main>
{body}
</main>
<footer class="site-footer">
<p class="footer-tagline">{footer_tagline}</p>
<div class="footer-navigation"><h2>{footer_navigation}</h2><ul>{nav_links}</ul></div>
{footer_contact}
<p class="copyright">&copy; {year} View Arquitetura e Engenharia. {rights} {made_with}</p>
</footer>
</body>
</html>
"#,
        lang = current.html_lang(),
        title = escape_html(title),
        alternates = alternates,
        alt_lang = alternate.html_lang(),
        alt_href = escape_html(&route.href(alternate)),
        home = Route::Home.href(current),
        tagline = escape_html(strings.brand_tagline),
        nav_links = nav_links,
        switch_label = escape_html(strings.language_switch_label),
        alt_native = escape_html(alternate.native_name()),
        alt_code = alternate.code().to_uppercase(),
        body = body,
        footer_tagline = escape_html(strings.footer_tagline),
        footer_navigation = escape_html(strings.footer_navigation),
        footer_contact = footer_contact,
        year = year,
        rights = escape_html(strings.footer_rights),
        made_with = escape_html(strings.footer_made_with),
    )
}

/// Render a page inside the full layout.
fn page(ctx: &RenderContext<'_>, route: &Route, title: &str, body: &str) -> String {
    document(ctx.locale, route, title, body, Some(ctx.studio), ctx.year)
}

/// The not-found page, rendered without the footer contact block.
pub fn not_found(locale: Locale) -> String {
    let strings = locale.strings();
    let body = format!(
        r#"<section class="not-found"><span class="code">404</span><h1>{}</h1><p>{}</p><a href="{}">{}</a></section>"#,
        escape_html(strings.not_found_title),
        escape_html(strings.not_found_lead),
        Route::Home.href(locale),
        escape_html(strings.back_home)
    );

    document(
        LocaleState::new(locale),
        &Route::Home,
        strings.not_found_title,
        &body,
        None,
        chrono::Utc::now().year(),
    )
}
