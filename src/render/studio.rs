use crate::catalog::{ContentCatalog, AWARDS, STATS};
use crate::render::{escape_html, page, RenderContext};
use crate::routes::Route;

/// Studio page: story, values, team and recognition.
pub fn studio(ctx: &RenderContext<'_>, catalog: &ContentCatalog) -> String {
    let locale = ctx.current();
    let strings = locale.strings();

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

    let values: String = catalog
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            format!(
                r#"<li><span class="number">{:02}</span><h3>{}</h3><p>{}</p></li>"#,
                i + 1,
                escape_html(value.title.at(locale)),
                escape_html(value.description.at(locale))
            )
        })
        .collect();

    let team: String = catalog
        .team
        .iter()
        .map(|member| {
            format!(
                r#"<li class="member"><img src="{}" alt="{name}"><h3>{name}</h3><p>{}</p></li>"#,
                escape_html(member.photo),
                escape_html(member.role.at(locale)),
                name = escape_html(member.name),
            )
        })
        .collect();

    let awards: String = AWARDS
        .iter()
        .map(|award| format!("<li>{}</li>", escape_html(award)))
        .collect();

    let body = format!(
        r#"<section class="studio-hero"><span class="label">{about}</span><h1>{title}</h1></section>
<section class="story">
<span class="label">{story_label}</span>
<h2>{headline}</h2>
<p>{body_1}</p>
<p>{body_2}</p>
<ul class="stats">{stats}</ul>
</section>
<section class="values"><span class="label">{values_label}</span><h2>{values_title}</h2><ol>{values}</ol></section>
<section class="team"><span class="label">{team_label}</span><h2>{team_title}</h2><ul>{team}</ul></section>
<section class="recognition"><h2>{recognition}</h2><ul>{awards}</ul></section>"#,
        about = escape_html(strings.about_label),
        title = escape_html(strings.studio_title),
        story_label = escape_html(strings.story_label),
        headline = escape_html(strings.story_headline),
        body_1 = escape_html(strings.story_body_1),
        body_2 = escape_html(strings.story_body_2),
        stats = stats,
        values_label = escape_html(strings.values_label),
        values_title = escape_html(strings.values_title),
        values = values,
        team_label = escape_html(strings.team_label),
        team_title = escape_html(strings.team_title),
        team = team,
        recognition = escape_html(strings.recognition_title),
        awards = awards,
    );

    page(ctx, &Route::Studio, strings.studio_title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudioInfo;
    use crate::i18n::Locale;

    fn render(locale: Locale) -> String {
        let studio_info = StudioInfo::default();
        let ctx = RenderContext::new(locale, &studio_info);
        studio(&ctx, &ContentCatalog::load())
    }

    #[test]
    fn test_studio_team_names_untranslated_roles_translated() {
        let pt = render(Locale::Pt);
        let en = render(Locale::En);

        assert!(pt.contains("<h3>Ana Clara Vasconcelos</h3><p>Diretora de Arquitetura</p>"));
        assert!(en.contains("<h3>Ana Clara Vasconcelos</h3><p>Architecture Director</p>"));
    }

    #[test]
    fn test_studio_values_numbered() {
        let html = render(Locale::En);
        assert!(html.contains(r#"<span class="number">01</span><h3>Integrity</h3>"#));
        assert!(html.contains(r#"<span class="number">04</span><h3>Collaboration</h3>"#));
    }

    #[test]
    fn test_studio_awards_and_stats() {
        let html = render(Locale::Pt);
        for award in AWARDS {
            assert!(html.contains(award));
        }
        assert!(html.contains("<strong>12</strong><span>Anos de Experiência</span>"));
    }
}
