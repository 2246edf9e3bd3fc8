use crate::catalog::ContentCatalog;
use crate::render::{encode_segment, escape_html, page, RenderContext};
use crate::routes::Route;

/// Home page: hero, manifesto, featured projects, process preview, contact teaser.
pub fn home(ctx: &RenderContext<'_>, catalog: &ContentCatalog) -> String {
    let locale = ctx.current();
    let strings = locale.strings();

    let featured: String = catalog
        .featured_projects()
        .iter()
        .map(|project| {
            let title = escape_html(project.title.at(locale));
            format!(
                r#"<li class="project-card"><a href="{href}"><img src="{image}" alt="{title}"><h3>{title}</h3><p>{category} · {year}</p></a></li>"#,
                href = escape_html(&Route::ProjectDetail(encode_segment(project.slug)).href(locale)),
                image = escape_html(project.hero_image),
                title = title,
                category = escape_html(project.category.label().at(locale)),
                year = project.year,
            )
        })
        .collect();

    let steps: String = catalog
        .process
        .iter()
        .map(|step| {
            format!(
                r#"<li><span class="number">{}</span><h3>{}</h3><p>{}</p></li>"#,
                escape_html(step.number),
                escape_html(step.title.at(locale)),
                escape_html(step.subtitle.at(locale)),
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
<h1><span>{hero_1}</span> <span>{hero_2}</span></h1>
<p>{hero_lead}</p>
</section>
<section class="manifesto">
<span class="label">{manifesto_label}</span>
<p>{manifesto_text}</p>
</section>
<section class="showcase">
<span class="label">{showcase_label}</span>
<h2>{showcase_title}</h2>
<ul class="projects">{featured}</ul>
<a href="{projects_href}">{view_all}</a>
</section>
<section class="process-preview">
<span class="label">{process_label}</span>
<h2>{process_title}</h2>
<p>{process_lead}</p>
<ol>{steps}</ol>
<a href="{process_href}">{explore_process}</a>
</section>
<section class="contact-teaser">
<span class="label">{teaser_label}</span>
<h2><span>{teaser_1}</span> <span>{teaser_2}</span></h2>
<p>{teaser_lead}</p>
<a href="{contact_href}">{contact}</a>
</section>"#,
        hero_1 = escape_html(strings.hero_line_1),
        hero_2 = escape_html(strings.hero_line_2),
        hero_lead = escape_html(strings.hero_lead),
        manifesto_label = escape_html(strings.manifesto_label),
        manifesto_text = escape_html(strings.manifesto_text),
        showcase_label = escape_html(strings.showcase_label),
        showcase_title = escape_html(strings.showcase_title),
        featured = featured,
        projects_href = Route::Projects.href(locale),
        view_all = escape_html(strings.view_all),
        process_label = escape_html(strings.process_label),
        process_title = escape_html(strings.process_title),
        process_lead = escape_html(strings.process_preview_lead),
        steps = steps,
        process_href = Route::Process.href(locale),
        explore_process = escape_html(strings.explore_process),
        teaser_label = escape_html(strings.teaser_label),
        teaser_1 = escape_html(strings.teaser_title_1),
        teaser_2 = escape_html(strings.teaser_title_2),
        teaser_lead = escape_html(strings.teaser_lead),
        contact_href = Route::Contact.href(locale),
        contact = escape_html(strings.nav_contact),
    );

    page(ctx, &Route::Home, strings.nav_home, &body)
}
