//! Coalition Atlas static site generator.
//!
//! Renders every combination of justices as a directory of static HTML,
//! CSS and JavaScript files. Every page is generated from a
//! `coalition_roster::Session`; the size pages are the session's filter
//! states rendered one after another.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use coalition_website::{generate, SiteConfig};
//!
//! let out = PathBuf::from("public");
//! generate(&SiteConfig::default(), &out).expect("Website generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html                      (filter: all)
//!   sizes/<k>/index.html            (filter: k, one per rendered size)
//!   combinations/<slug>/index.html  (one per combination)
//!   about.html
//!   data/combinations.json
//!   data/roster.json
//!   sitemap.xml
//!   css/style.css
//!   js/browser.js
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod data;
pub mod extractor;
pub mod model;
pub mod nav;
pub mod renderer;
pub mod writer;

use std::path::Path;

use anyhow::{Context, Result};
use coalition_roster::labels::size_name;
use coalition_roster::serializer::json::to_json;
use coalition_roster::{Session, SizeFilter};
use tracing::info;

pub use config::SiteConfig;

use extractor::{
    combination_breadcrumbs, combination_path, group_views, home_breadcrumbs, page_breadcrumbs,
    size_breadcrumbs, size_path, statistics_view,
};
use nav::{build_nav, render_nav};
use renderer::{
    escape_html, markdown_to_html, render_detail, render_groups, render_page, render_sitemap,
    render_statistics,
};

/// Generates the complete website into `out_dir`.
///
/// # Errors
///
/// Returns an error if the session cannot be built or any file cannot be
/// written.
pub fn generate(config: &SiteConfig, out_dir: &Path) -> Result<()> {
    let mut session = Session::new(config.variant).context("Cannot build browser session")?;
    let variant = session.variant();
    let nav = build_nav(variant, config);
    let matrix = session.pair_matrix();
    let stats_html = render_statistics(&statistics_view(&session)?);

    // Track all pages for sitemap
    let mut sitemap_paths: Vec<String> = Vec::new();

    // Homepage: filter state ALL
    session.select_size(SizeFilter::All)?;
    let groups = group_views(&session, config);
    let home_body = format!(
        "<h1>{}</h1>\n{}{}",
        escape_html(&config.title),
        stats_html,
        render_groups(&groups, variant, matrix.as_ref(), session.roster(), config)
    );
    let home_html = render_page(
        "All Combinations",
        &home_body,
        &render_nav(&nav, &config.url("/")),
        &home_breadcrumbs(config),
        config,
    );
    writer::write(&out_dir.join("index.html"), &home_html)?;
    sitemap_paths.push(config.url("/"));

    // One page per size filter state
    for size in variant.size_range() {
        session.select_size(SizeFilter::Size(size))?;
        let path = size_path(size);
        let groups = group_views(&session, config);
        let body = format!(
            "<h1>{}</h1>\n{}{}",
            escape_html(&size_name(size)),
            stats_html,
            render_groups(&groups, variant, matrix.as_ref(), session.roster(), config)
        );
        let html = render_page(
            &size_name(size),
            &body,
            &render_nav(&nav, &config.url(&path)),
            &size_breadcrumbs(size, config),
            config,
        );
        writer::write(
            &out_dir.join("sizes").join(size.to_string()).join("index.html"),
            &html,
        )?;
        sitemap_paths.push(config.url(&path));
    }
    session.select_size(SizeFilter::All)?;

    // Detail page for every combination
    let detail_nav = render_nav(&nav, "");
    for combination in session.combinations() {
        let detail = session.detail(combination.ids())?;
        let html = render_page(
            &detail.title,
            &render_detail(&detail),
            &detail_nav,
            &combination_breadcrumbs(combination, config),
            config,
        );
        let out_path = out_dir
            .join("combinations")
            .join(combination.slug())
            .join("index.html");
        writer::write(&out_path, &html)?;
        sitemap_paths.push(config.url(&combination_path(combination)));
    }

    // About page
    let about_html = render_page(
        "About",
        &markdown_to_html(about_md()),
        &render_nav(&nav, &config.url("/about.html")),
        &page_breadcrumbs("About", config),
        config,
    );
    writer::write(&out_dir.join("about.html"), &about_html)?;
    sitemap_paths.push(config.url("/about.html"));

    // Data exports
    let index_json = data::generate_combination_index(&session, config)?;
    writer::write(&out_dir.join("data").join("combinations.json"), &index_json)?;
    let roster_json = serde_json::to_string_pretty(&to_json(&session))
        .context("Failed to serialize roster export")?;
    writer::write(&out_dir.join("data").join("roster.json"), &roster_json)?;

    // Sitemap
    let sitemap_xml = render_sitemap(&config.base_url, &sitemap_paths);
    writer::write(&out_dir.join("sitemap.xml"), &sitemap_xml)?;

    // CSS
    writer::write(&out_dir.join("css").join("style.css"), style_css())?;

    // JavaScript
    writer::write(&out_dir.join("js").join("browser.js"), data::browser_js())?;

    info!(
        variant = variant.as_str(),
        pages = sitemap_paths.len(),
        out = %out_dir.display(),
        "website generated"
    );
    Ok(())
}

/// Returns the complete CSS stylesheet.
fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}

/// Returns the About page source.
fn about_md() -> &'static str {
    include_str!("../content/about.md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalition_roster::Variant;

    fn read(dir: &Path, rel: &str) -> String {
        std::fs::read_to_string(dir.join(rel)).unwrap()
    }

    #[test]
    fn full_site_has_every_page() {
        let dir = tempfile::tempdir().unwrap();
        generate(&SiteConfig::default(), dir.path()).unwrap();

        let home = read(dir.path(), "index.html");
        assert!(home.contains("Pairs (2 Justices) (4 of 36 occurred)"));
        assert!(home.contains("All Nine Justices (Unanimous) (1 of 1 occurred)"));
        assert!(home.contains("id=\"completion-rate\">4.0%</span>"));

        for size in 2..=9 {
            assert!(dir.path().join(format!("sizes/{size}/index.html")).exists());
        }
        let trios = read(dir.path(), "sizes/3/index.html");
        assert!(trios.contains("Trios (3 Justices) (5 of 84 occurred)"));
        assert!(!trios.contains("Pairs (2 Justices) ("));

        let detail = read(dir.path(), "combinations/0-1-2-3-4-5-6-7-8/index.html");
        assert!(detail.contains("Smith v. United States"));
        assert!(detail.contains("9 Justice Combination"));

        let export: serde_json::Value =
            serde_json::from_str(&read(dir.path(), "data/roster.json")).unwrap();
        assert_eq!(export["variant"], "full");
        assert_eq!(export["combinations"].as_array().map(Vec::len), Some(502));

        let sitemap = read(dir.path(), "sitemap.xml");
        assert_eq!(sitemap.matches("<url>").count(), 1 + 8 + 502 + 1);
    }

    #[test]
    fn restricted_site_draws_matrix_and_selectors() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            variant: Variant::Restricted,
            ..SiteConfig::default()
        };
        generate(&config, dir.path()).unwrap();

        let home = read(dir.path(), "index.html");
        assert!(home.contains("class=\"pair-matrix\""));
        assert_eq!(home.matches("class=\"member-selector\"").count(), 2);
        assert!(!home.contains("completion-rate"));
        assert!(!dir.path().join("sizes/5/index.html").exists());

        let pair = read(dir.path(), "combinations/0-6/index.html");
        assert!(pair.contains("Harris v. State of Georgia"));
        assert!(!pair.contains("case-type"));
    }
}
