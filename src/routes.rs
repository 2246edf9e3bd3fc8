//! Logical site routes.
//!
//! A `Route` is locale-invariant; `href` qualifies it with a locale through
//! the path localizer.

use crate::i18n::{localize, Locale, UiStrings};

/// A page of the site, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(String),
    Process,
    Studio,
    Contact,
}

impl Route {
    /// Top-level navigation entries, in menu order.
    pub const NAVIGATION: [Route; 4] = [Route::Projects, Route::Process, Route::Studio, Route::Contact];

    /// Locale-invariant path (e.g. "/projects/casa-mirante").
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(slug) => format!("/projects/{}", slug),
            Route::Process => "/process".to_string(),
            Route::Studio => "/studio".to_string(),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Locale-qualified href.
    pub fn href(&self, locale: Locale) -> String {
        localize(&self.path(), locale)
    }

    /// Parse a locale-invariant path back into a route.
    ///
    /// Trailing slashes are ignored; anything else unknown is `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["projects"] => Some(Route::Projects),
            ["projects", slug] => Some(Route::ProjectDetail(slug.to_string())),
            ["process"] => Some(Route::Process),
            ["studio"] => Some(Route::Studio),
            ["contact"] => Some(Route::Contact),
            _ => None,
        }
    }

    /// Navigation label, for routes that appear in menus.
    pub fn nav_label(&self, strings: &UiStrings) -> &'static str {
        match self {
            Route::Home => strings.nav_home,
            Route::Projects | Route::ProjectDetail(_) => strings.nav_projects,
            Route::Process => strings.nav_process,
            Route::Studio => strings.nav_studio,
            Route::Contact => strings.nav_contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{delocalize, ENGLISH_STRINGS};

    #[test]
    fn test_href_per_locale() {
        assert_eq!(Route::Home.href(Locale::Pt), "/pt");
        assert_eq!(Route::Projects.href(Locale::En), "/en/projects");
        assert_eq!(
            Route::ProjectDetail("loft-jardins".into()).href(Locale::Pt),
            "/pt/projects/loft-jardins"
        );
        assert_eq!(Route::Contact.href(Locale::En), "/en/contact");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/studio/"), Some(Route::Studio));
        assert_eq!(
            Route::from_path("/projects/casa-mirante"),
            Some(Route::ProjectDetail("casa-mirante".into()))
        );
        assert_eq!(Route::from_path("/projects/a/b"), None);
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn test_href_delocalizes_back() {
        let routes = [
            Route::Home,
            Route::Projects,
            Route::ProjectDetail("praca-das-aguas".into()),
            Route::Process,
            Route::Studio,
            Route::Contact,
        ];
        for route in routes {
            for locale in Locale::ALL {
                let (parsed_locale, path) = delocalize(&route.href(locale)).unwrap();
                assert_eq!(parsed_locale, locale);
                assert_eq!(Route::from_path(&path), Some(route.clone()));
            }
        }
    }

    #[test]
    fn test_nav_labels() {
        let labels: Vec<&str> = Route::NAVIGATION
            .iter()
            .map(|route| route.nav_label(&ENGLISH_STRINGS))
            .collect();
        assert_eq!(labels, vec!["Projects", "Process", "Studio", "Contact"]);
    }
}
