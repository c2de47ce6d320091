//! HTML rendering for every page of the site.

use coalition_roster::labels::case_count_label;
use coalition_roster::{Cell, CombinationDetail, Justice, Occurrences, PairMatrix, Variant};
use pulldown_cmark::{html, Options, Parser};

use crate::config::SiteConfig;
use crate::extractor::combination_path;
use crate::model::{BreadcrumbItem, CardView, GroupView, StatisticsView};

/// Renders a page inside the standard site shell.
pub fn render_page(
    title: &str,
    content_html: &str,
    nav_html: &str,
    breadcrumbs: &[BreadcrumbItem],
    config: &SiteConfig,
) -> String {
    let home_url = config.url("/");
    let css_url = config.url("/css/style.css");
    let js_url = config.url("/js/browser.js");
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — {site_title}</title>
<link rel="stylesheet" href="{css_url}">
</head>
<body>
<a href="#main-content" class="skip-link">Skip to main content</a>
<header class="site-header">
<a href="{home_url}" class="site-logo">{site_title}</a>
<nav aria-label="Combination filters" class="site-nav">
{nav_html}
</nav>
</header>
<main id="main-content">
<nav aria-label="Breadcrumb" class="breadcrumb">{breadcrumb}</nav>
<article class="page-content">
{content_html}
</article>
</main>
<footer class="site-footer">
<p>{site_title} — illustrative data, not drawn from the U.S. Reports.</p>
</footer>
<script src="{js_url}" defer></script>
</body>
</html>"##,
        title = escape_html(title),
        site_title = escape_html(&config.title),
        home_url = escape_html(&home_url),
        css_url = escape_html(&css_url),
        nav_html = nav_html,
        breadcrumb = render_breadcrumbs(breadcrumbs),
        content_html = content_html,
        js_url = escape_html(&js_url),
    )
}

/// Renders a breadcrumb trail; the last item is plain text.
fn render_breadcrumbs(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.url.is_empty() {
                escape_html(&item.label)
            } else {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html(&item.url),
                    escape_html(&item.label)
                )
            }
        })
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Renders the statistics panel.
pub fn render_statistics(stats: &StatisticsView) -> String {
    let mut html = String::from("<section class=\"statistics\" aria-label=\"Statistics\">\n");
    html.push_str(&format!(
        "<div class=\"stat\"><span class=\"stat-value\" id=\"total-combinations\">{}</span><span class=\"stat-label\">Possible combinations</span></div>\n",
        stats.total
    ));
    html.push_str(&format!(
        "<div class=\"stat\"><span class=\"stat-value\" id=\"occurred-count\">{}</span><span class=\"stat-label\">Have occurred</span></div>\n",
        stats.occurred
    ));
    if let Some(rate) = &stats.completion_rate {
        html.push_str(&format!(
            "<div class=\"stat\"><span class=\"stat-value\" id=\"completion-rate\">{}</span><span class=\"stat-label\">Complete</span></div>\n",
            escape_html(rate)
        ));
    }
    html.push_str("</section>\n");
    html
}

/// Renders the visible size groups.
///
/// In the restricted variant the pairs group is drawn as `matrix` and the
/// larger groups get a required-members selector.
pub fn render_groups(
    groups: &[GroupView],
    variant: Variant,
    matrix: Option<&PairMatrix>,
    roster: &[Justice],
    config: &SiteConfig,
) -> String {
    let mut html = String::from("<div id=\"visualization\">\n");
    for group in groups {
        let body = match (variant, matrix) {
            (Variant::Restricted, Some(matrix)) if group.size == 2 => {
                render_matrix(matrix, roster, config)
            }
            (Variant::Restricted, _) => format!(
                "{}{}",
                render_member_selector(group.size, roster),
                render_grid(&group.cards)
            ),
            (Variant::Full, _) => render_grid(&group.cards),
        };
        html.push_str(&format!(
            "<section class=\"size-group\" data-size=\"{size}\">\n<h2 class=\"size-group-header\">{header}</h2>\n{body}</section>\n",
            size = group.size,
            header = escape_html(&group.header),
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Renders a grid of combination cards.
fn render_grid(cards: &[CardView]) -> String {
    let mut html = String::from("<div class=\"combinations-grid\">\n");
    for card in cards {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>\n");
    html
}

/// Renders a single combination card as a link to its detail page.
pub fn render_card(card: &CardView) -> String {
    let mut class = String::from("combination-card");
    if card.occurred {
        class.push_str(" occurred");
        if let Some(badge) = card.badge {
            class.push(' ');
            class.push_str(badge);
        }
    }
    let info_class = if card.occurred {
        "combination-info"
    } else {
        "not-occurred-label"
    };
    let members = card
        .ids
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "<a class=\"{class}\" href=\"{url}\" data-members=\"{members}\">\
<span class=\"combination-justices\">{names}</span>\
<span class=\"{info_class}\">{info}</span></a>\n",
        url = escape_html(&card.url),
        names = escape_html(&card.members),
        info = escape_html(&card.info),
    )
}

/// Renders the required-members buttons for one size bucket.
fn render_member_selector(size: usize, roster: &[Justice]) -> String {
    let mut html = format!(
        "<div class=\"member-selector\" data-size=\"{size}\" data-cap=\"{size}\">\n\
<p class=\"selector-hint\">Require up to {size} justices:</p>\n"
    );
    for justice in roster {
        html.push_str(&format!(
            "<button type=\"button\" class=\"member-btn\" data-id=\"{}\" aria-pressed=\"false\">{}</button>\n",
            justice.id,
            escape_html(justice.short_name)
        ));
    }
    html.push_str("<button type=\"button\" class=\"member-clear\">Clear</button>\n</div>\n");
    html
}

/// Renders the lower-triangular pair matrix.
pub fn render_matrix(matrix: &PairMatrix, roster: &[Justice], config: &SiteConfig) -> String {
    let mut html = String::from("<table class=\"pair-matrix\">\n<thead><tr><th scope=\"col\"></th>");
    for justice in roster.iter().take(matrix.dimension()) {
        html.push_str(&format!(
            "<th scope=\"col\">{}</th>",
            escape_html(justice.short_name)
        ));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (row, cells) in matrix.rows().iter().enumerate() {
        let name = roster.get(row).map(|j| j.short_name).unwrap_or_default();
        html.push_str(&format!("<tr><th scope=\"row\">{}</th>", escape_html(name)));
        for cell in cells {
            match cell {
                Cell::Empty => html.push_str("<td class=\"empty\"></td>"),
                Cell::Pair {
                    combination,
                    occurred,
                    case_count,
                } => {
                    let (class, label) = if *occurred {
                        ("occurred", case_count_label(*case_count))
                    } else {
                        ("not-occurred", "—".to_string())
                    };
                    html.push_str(&format!(
                        "<td class=\"{class}\"><a href=\"{url}\" title=\"{key}\">{label}</a></td>",
                        url = escape_html(&config.url(&combination_path(combination))),
                        key = escape_html(&combination.key()),
                        label = escape_html(&label),
                    ));
                }
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Renders a combination detail page body.
pub fn render_detail(detail: &CombinationDetail) -> String {
    let mut html = format!("<h1 id=\"modal-title\">{}</h1>\n", escape_html(&detail.title));

    html.push_str("<div class=\"modal-justices\">\n<h3>Justices in this Combination</h3>\n<ul class=\"justice-list\">\n");
    for member in &detail.members {
        html.push_str(&format!("<li>{}</li>\n", escape_html(member)));
    }
    html.push_str("</ul>\n</div>\n");

    html.push_str("<div class=\"cases-section\">\n");
    match &detail.occurrences {
        Occurrences::Recorded { cases } => {
            html.push_str(&format!("<h3>Cases ({})</h3>\n", cases.len()));
            for case in cases {
                html.push_str("<div class=\"case-item\">\n");
                html.push_str(&format!(
                    "<div class=\"case-name\">{}</div>\n<div class=\"case-details\">",
                    escape_html(case.case_name)
                ));
                if let Some(opinion) = case.opinion {
                    html.push_str(&format!(
                        "<span class=\"case-type {}\">{}</span>",
                        opinion.as_str(),
                        opinion.label()
                    ));
                }
                html.push_str(&format!(
                    "<span>{}</span><span>{}</span></div>\n</div>\n",
                    escape_html(case.date),
                    escape_html(case.citation)
                ));
            }
        }
        Occurrences::NotYetOccurred { message } => {
            html.push_str("<div class=\"no-cases\">\n");
            for paragraph in message {
                html.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
            }
            html.push_str("</div>\n");
        }
    }
    html.push_str("</div>\n");
    html
}

/// Converts Markdown to HTML using pulldown-cmark.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, opts);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders `sitemap.xml` for the given site-absolute paths.
pub fn render_sitemap(base_url: &str, paths: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc></url>\n",
            escape_html(base_url.trim_end_matches('/')),
            escape_html(path)
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
