use crate::catalog::{
    filter_by_category, next_index, prev_index, CategoryFilter, ContentCatalog, Project, STATS,
};
use crate::render::{encode_segment, escape_html, page, RenderContext};
use crate::routes::Route;

/// Projects listing, filtered by `category` (`"all"` or a category id).
pub fn projects(ctx: &RenderContext<'_>, catalog: &ContentCatalog, category: &str) -> String {
    let locale = ctx.current();
    let strings = locale.strings();
    let listing_href = Route::Projects.href(locale);

    let filters: String = CategoryFilter::options()
        .into_iter()
        .map(|option| {
            let active = if option.id == category { r#" aria-current="true""# } else { "" };
            format!(
                r#"<li><a href="{}?category={}"{}>{}</a></li>"#,
                escape_html(&listing_href),
                option.id,
                active,
                escape_html(option.label.at(locale))
            )
        })
        .collect();

    let matching = filter_by_category(&catalog.projects, category);
    let items: String = if matching.is_empty() {
        format!(r#"<p class="empty">{}</p>"#, escape_html(strings.projects_empty))
    } else {
        let cards: String = matching
            .into_iter()
            .map(|project| {
                format!(
                    r#"<li class="project-item"><a href="{href}"><img src="{image}" alt="{title}"><h2>{title}</h2><p>{category} · {location} · {year}</p><p>{area}</p></a></li>"#,
                    href = escape_html(&Route::ProjectDetail(encode_segment(project.slug)).href(locale)),
                    image = escape_html(project.hero_image),
                    title = escape_html(project.title.at(locale)),
                    category = escape_html(project.category.label().at(locale)),
                    location = escape_html(project.location),
                    year = project.year,
                    area = escape_html(project.area),
                )
            })
            .collect();
        format!(r#"<ul class="projects">{}</ul>"#, cards)
    };

    let stats: String = STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<li><strong>{}</strong><span>{}</span></li>"#,
                escape_html(stat.number),
                escape_html(stat.label.at(locale))
            )
        })
        .collect();

    let body = format!(
        r#"<section class="projects-hero"><span class="label">{}</span><h1>{}</h1></section>
<nav class="category-filter"><ul>{}</ul></nav>
<section class="project-list">{}</section>
<section class="stats"><ul>{}</ul></section>"#,
        escape_html(strings.portfolio_label),
        escape_html(strings.projects_title),
        filters,
        items,
        stats
    );

    page(ctx, &Route::Projects, strings.projects_title, &body)
}

/// Project detail page with the gallery positioned at `image`.
pub fn project_detail(ctx: &RenderContext<'_>, project: &Project, image: usize) -> String {
    let locale = ctx.current();
    let strings = locale.strings();
    let route = Route::ProjectDetail(encode_segment(project.slug));
    let detail_href = route.href(locale);
    let title = project.title.at(locale);

    let facts = [
        (strings.location, project.location.to_string()),
        (strings.area, project.area.to_string()),
        (strings.year, project.year.to_string()),
        (strings.client, project.client.at(locale).to_string()),
    ];
    let facts: String = facts
        .iter()
        .map(|(label, value)| {
            format!(
                "<dt>{}</dt><dd>{}</dd>",
                escape_html(label),
                escape_html(value)
            )
        })
        .collect();

    let gallery = match project.gallery_image(image) {
        Some((index, src)) => {
            let len = project.gallery.len();
            let thumbnails: String = project
                .gallery
                .iter()
                .enumerate()
                .map(|(i, thumb)| {
                    let active = if i == index { r#" aria-current="true""# } else { "" };
                    format!(
                        r#"<li><a href="{}?image={}"{}><img src="{}" alt="{} {}"></a></li>"#,
                        escape_html(&detail_href),
                        i,
                        active,
                        escape_html(thumb),
                        escape_html(title),
                        i + 1
                    )
                })
                .collect();
            format!(
                r#"<section class="gallery">
<img class="active" src="{src}" alt="{title}">
<a class="prev" href="{href}?image={prev}" aria-label="{prev_label}">&larr;</a>
<span class="counter">{current} / {len}</span>
<a class="next" href="{href}?image={next}" aria-label="{next_label}">&rarr;</a>
<ul class="thumbnails">{thumbnails}</ul>
</section>"#,
                src = escape_html(src),
                title = escape_html(title),
                href = escape_html(&detail_href),
                prev = prev_index(index, len),
                prev_label = escape_html(strings.previous_image),
                current = index + 1,
                len = len,
                next = next_index(index, len),
                next_label = escape_html(strings.next_image),
                thumbnails = thumbnails,
            )
        }
        None => String::new(),
    };

    let body = format!(
        r#"<section class="project-hero">
<img src="{hero}" alt="{title}">
<a class="back" href="{projects_href}">{back}</a>
<span class="label">{category} · {year}</span>
<h1>{title}</h1>
</section>
<section class="project-info">
<dl>{facts}</dl>
<p>{description}</p>
</section>
{gallery}
<section class="explore-more">
<span class="label">{explore_more}</span>
<a href="{projects_href}">{view_all_projects}</a>
</section>"#,
        hero = escape_html(project.hero_image),
        title = escape_html(title),
        projects_href = Route::Projects.href(locale),
        back = escape_html(strings.back),
        category = escape_html(project.category.label().at(locale)),
        year = project.year,
        facts = facts,
        description = escape_html(project.description.at(locale)),
        gallery = gallery,
        explore_more = escape_html(strings.explore_more),
        view_all_projects = escape_html(strings.view_all_projects),
    );

    page(ctx, &route, title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioInfo;
    use crate::i18n::Locale;

    fn render_listing(locale: Locale, category: &str) -> String {
        let studio = StudioInfo::default();
        let ctx = RenderContext::new(locale, &studio);
        projects(&ctx, &ContentCatalog::load(), category)
    }

    fn render_detail(locale: Locale, slug: &str, image: usize) -> String {
        let studio = StudioInfo::default();
        let ctx = RenderContext::new(locale, &studio);
        let catalog = ContentCatalog::load();
        let project = catalog.projects.find(slug).unwrap();
        project_detail(&ctx, project, image)
    }

    // ==================== Listing Tests ====================

    #[test]
    fn test_listing_all_shows_every_project() {
        let html = render_listing(Locale::Pt, "all");
        for slug in ContentCatalog::load().projects.keys() {
            assert!(html.contains(&format!("/pt/projects/{}", slug)), "missing {}", slug);
        }
    }

    #[test]
    fn test_listing_filtered() {
        let html = render_listing(Locale::En, "interiores");
        assert!(html.contains("Jardins Loft"));
        assert!(!html.contains("Viewpoint House"));
        assert!(html.contains(r#"href="/en/projects?category=interiores" aria-current="true""#));
    }

    #[test]
    fn test_listing_unknown_category_is_empty_not_error() {
        let html = render_listing(Locale::En, "industrial");
        assert!(html.contains("No projects in this category."));
    }

    #[test]
    fn test_listing_stats() {
        let html = render_listing(Locale::Pt, "all");
        assert!(html.contains("<strong>47</strong><span>Projetos Realizados</span>"));
    }

    // ==================== Detail Tests ====================

    #[test]
    fn test_detail_localized_fields() {
        let html = render_detail(Locale::En, "casa-mirante", 0);
        assert!(html.contains("<h1>Viewpoint House</h1>"));
        assert!(html.contains("<dt>Location</dt><dd>Campos do Jordão, SP</dd>"));
        assert!(html.contains("<dt>Client</dt><dd>Private</dd>"));
        assert!(html.contains(r#"class="language-switch" href="/pt/projects/casa-mirante""#));
    }

    #[test]
    fn test_detail_gallery_wraps_from_first() {
        let html = render_detail(Locale::Pt, "casa-mirante", 0);
        assert!(html.contains(r#"href="/pt/projects/casa-mirante?image=3" aria-label="Imagem anterior""#));
        assert!(html.contains(r#"href="/pt/projects/casa-mirante?image=1" aria-label="Próxima imagem""#));
        assert!(html.contains("1 / 4"));
    }

    #[test]
    fn test_detail_gallery_wraps_from_last() {
        let html = render_detail(Locale::En, "loft-jardins", 3);
        assert!(html.contains(r#"?image=0" aria-label="Next image""#));
        assert!(html.contains("4 / 4"));
    }

    #[test]
    fn test_detail_out_of_range_image_clamps() {
        let html = render_detail(Locale::En, "loft-jardins", 42);
        assert!(html.contains("1 / 4"));
    }
}
