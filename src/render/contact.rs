use crate::contact::{ContactField, ContactForm, ProjectType};
use crate::render::{escape_html, page, RenderContext};
use crate::routes::Route;

const ADDRESS_LINES: [&str; 3] = ["Rua Augusta, 1200", "Consolação, São Paulo", "SP 01304-000"];

const SOCIAL_NETWORKS: [&str; 3] = ["Instagram", "LinkedIn", "Behance"];

/// State of the contact page.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    /// Values to refill the form with
    pub form: ContactForm,
    /// Required fields left blank on the last attempt
    pub missing: Vec<ContactField>,
    /// The submission completed; show the confirmation instead of the form
    pub submitted: bool,
}

impl ContactView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rejected(form: ContactForm, missing: Vec<ContactField>) -> Self {
        Self {
            form,
            missing,
            submitted: false,
        }
    }

    pub fn submitted() -> Self {
        Self {
            submitted: true,
            ..Self::default()
        }
    }
}

pub fn contact(ctx: &RenderContext<'_>, view: &ContactView) -> String {
    let locale = ctx.current();
    let strings = locale.strings();

    let address = ADDRESS_LINES
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");

    let social: String = SOCIAL_NETWORKS
        .iter()
        .map(|network| format!(r##"<li><a href="#">{}</a></li>"##, network))
        .collect();

    let form_block = if view.submitted {
        format!(
            r#"<div class="form-success" role="status"><h3>{}</h3><p>{}</p></div>"#,
            escape_html(strings.message_sent),
            escape_html(strings.message_sent_lead)
        )
    } else {
        render_form(ctx, view)
    };

    let body = format!(
        r#"<section class="contact-hero"><span class="label">{label}</span><h1>{title}</h1></section>
<section class="contact-info">
<h2>{headline}</h2>
<dl>
<dt>{address_label}</dt><dd>{address}</dd>
<dt>Email</dt><dd><a href="mailto:{email}">{email}</a></dd>
<dt>{phone_label}</dt><dd><a href="tel:{tel}">{phone}</a></dd>
</dl>
<h3>{social_label}</h3>
<ul class="social">{social}</ul>
</section>
<section class="contact-form">
<h2>{form_title}</h2>
<p>{form_lead}</p>
{form_block}
</section>"#,
        label = escape_html(strings.contact_label),
        title = escape_html(strings.contact_title),
        headline = escape_html(strings.contact_headline),
        address_label = escape_html(strings.address),
        address = address,
        email = escape_html(&ctx.studio.email),
        phone_label = escape_html(strings.phone),
        tel = escape_html(&ctx.studio.phone_href()),
        phone = escape_html(&ctx.studio.phone),
        social_label = escape_html(strings.social_media),
        social = social,
        form_title = escape_html(strings.form_title),
        form_lead = escape_html(strings.form_lead),
        form_block = form_block,
    );

    page(ctx, &Route::Contact, strings.contact_title, &body)
}

fn render_form(ctx: &RenderContext<'_>, view: &ContactView) -> String {
    let locale = ctx.current();
    let strings = locale.strings();
    let form = &view.form;

    let errors = if view.missing.is_empty() {
        String::new()
    } else {
        let fields: String = view
            .missing
            .iter()
            .map(|field| format!("<li>{}</li>", escape_html(field.label(strings))))
            .collect();
        format!(
            r#"<div class="form-errors" role="alert"><p>{}</p><ul>{}</ul></div>"#,
            escape_html(strings.missing_fields),
            fields
        )
    };

    let selected_type = form.project_type.trim();
    let placeholder_selected = if ProjectType::from_value(selected_type).is_none() {
        " selected"
    } else {
        ""
    };
    let options: String = ProjectType::ALL
        .iter()
        .map(|kind| {
            let selected = if kind.value() == selected_type { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                kind.value(),
                selected,
                escape_html(kind.label().at(locale))
            )
        })
        .collect();

    format!(
        r#"{errors}<form method="post" action="{action}">
<label>{name_label} *<input type="text" name="name" required value="{name}"></label>
<label>{email_label} *<input type="email" name="email" required value="{email}"></label>
<label>{phone_label}<input type="tel" name="phone" value="{phone}"></label>
<label>{type_label} *<select name="projectType" required><option value=""{placeholder_selected} disabled>{placeholder}</option>{options}</select></label>
<label>{message_label} *<textarea name="message" required placeholder="{message_placeholder}">{message}</textarea></label>
<button type="submit">{send}</button>
</form>"#,
        errors = errors,
        action = Route::Contact.href(locale),
        name_label = escape_html(strings.field_name),
        name = escape_html(&form.name),
        email_label = escape_html(strings.field_email),
        email = escape_html(&form.email),
        phone_label = escape_html(strings.field_phone),
        phone = escape_html(&form.phone),
        type_label = escape_html(strings.field_project_type),
        placeholder_selected = placeholder_selected,
        placeholder = escape_html(strings.select_placeholder),
        options = options,
        message_label = escape_html(strings.field_message),
        message_placeholder = escape_html(strings.message_placeholder),
        message = escape_html(&form.message),
        send = escape_html(strings.send_message),
    )
}
