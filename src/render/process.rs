use crate::catalog::ContentCatalog;
use crate::render::{escape_html, page, RenderContext};
use crate::routes::Route;

pub fn process(ctx: &RenderContext<'_>, catalog: &ContentCatalog) -> String {
    let locale = ctx.current();
    let strings = locale.strings();

    let steps: String = catalog
        .process
        .iter()
        .map(|step| {
            let details: String = step
                .details
                .at(locale)
                .iter()
                .map(|detail| format!("<li>{}</li>", escape_html(detail)))
                .collect();
            format!(
                r#"<article class="process-step" id="step-{number}">
<img src="{image}" alt="{title}">
<span class="number">{number}</span>
<h2>{title}</h2>
<h3>{subtitle}</h3>
<p>{description}</p>
<ul class="details">{details}</ul>
</article>"#,
                number = escape_html(step.number),
                image = escape_html(step.image),
                title = escape_html(step.title.at(locale)),
                subtitle = escape_html(step.subtitle.at(locale)),
                description = escape_html(step.description.at(locale)),
                details = details,
            )
        })
        .collect();

    let body = format!(
        r#"<section class="process-hero"><span class="label">{}</span><h1>{}</h1><p>{}</p></section>
<section class="process-steps">{}</section>
<section class="process-cta"><h2>{}</h2><a href="{}">{}</a></section>"#,
        escape_html(strings.process_label),
        escape_html(strings.process_title),
        escape_html(strings.process_lead),
        steps,
        escape_html(strings.process_cta),
        Route::Contact.href(locale),
        escape_html(strings.contact_us)
    );

    page(ctx, &Route::Process, strings.nav_process, &body)
}
