//! Filter navigation.
//!
//! The size filter is a flat list of links, one per filter state: ALL,
//! then one SIZE_k entry per size the variant renders. The entry for the
//! page being rendered is marked current.

use coalition_roster::labels::size_name;
use coalition_roster::Variant;

use crate::config::SiteConfig;
use crate::extractor::size_path;
use crate::model::NavItem;
use crate::renderer::escape_html;

/// Builds the primary site navigation tree.
pub fn build_nav(variant: Variant, config: &SiteConfig) -> Vec<NavItem> {
    let sizes: Vec<NavItem> = variant
        .size_range()
        .map(|size| NavItem {
            label: size_name(size),
            url: config.url(&size_path(size)),
            children: Vec::new(),
        })
        .collect();

    vec![
        NavItem {
            label: "All".to_string(),
            url: config.url("/"),
            children: Vec::new(),
        },
        NavItem {
            label: "By size".to_string(),
            url: String::new(),
            children: sizes,
        },
        NavItem {
            label: "About".to_string(),
            url: config.url("/about.html"),
            children: Vec::new(),
        },
    ]
}

/// Renders the navigation tree as an HTML string.
pub fn render_nav(nav: &[NavItem], current_path: &str) -> String {
    let mut html = String::from("<ul class=\"filter-nav\">\n");
    for item in nav {
        render_nav_item(&mut html, item, current_path, 1);
    }
    html.push_str("</ul>\n");
    html
}

/// Recursively renders a navigation item.
fn render_nav_item(html: &mut String, item: &NavItem, current_path: &str, depth: usize) {
    let is_current = !item.url.is_empty() && item.url == current_path;
    let indent = "  ".repeat(depth);

    if item.url.is_empty() {
        html.push_str(&format!(
            "{indent}<li><span>{label}</span>",
            label = escape_html(&item.label)
        ));
    } else {
        let (class, aria) = if is_current {
            (" class=\"filter-btn active\"", " aria-current=\"page\"")
        } else {
            (" class=\"filter-btn\"", "")
        };
        html.push_str(&format!(
            "{indent}<li><a href=\"{url}\"{class}{aria}>{label}</a>",
            url = escape_html(&item.url),
            label = escape_html(&item.label)
        ));
    }

    if !item.children.is_empty() {
        html.push_str(&format!("\n{indent}<ul>\n"));
        for child in &item.children {
            render_nav_item(html, child, current_path, depth + 1);
        }
        html.push_str(&format!("{indent}</ul>\n{indent}"));
    }

    html.push_str("</li>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_size() {
        let config = SiteConfig::default();
        let nav = build_nav(Variant::Restricted, &config);
        assert_eq!(nav[1].children.len(), 3);
        let nav = build_nav(Variant::Full, &config);
        assert_eq!(nav[1].children.len(), 8);
    }

    #[test]
    fn marks_only_the_current_page() {
        let config = SiteConfig::default();
        let html = render_nav(&build_nav(Variant::Full, &config), "/sizes/3/");
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains("href=\"/sizes/3/\" class=\"filter-btn active\""));
    }
}
