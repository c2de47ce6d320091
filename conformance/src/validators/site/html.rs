//! HTML structural validator for the generated website.
//!
//! Checks structural requirements on all `.html` files in the output:
//! - `<title>` element present on every page
//! - Semantic elements present: `<nav>`, `<main>`, `<footer>`
//! - `lang` attribute on `<html>` element
//! - a skip link targeting `#main-content`

use std::path::Path;

use anyhow::Result;
use tracing::debug;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/html";

/// Validates HTML structure of all website pages.
///
/// # Errors
///
/// Returns an error if the artifacts directory cannot be walked.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(TestResult::warn(
            VALIDATOR,
            "Artifacts directory not found, skipping HTML validation",
        ));
        return Ok(report);
    }

    let mut issues: Vec<String> = Vec::new();
    let mut pages_checked = 0u32;

    for entry in WalkDir::new(artifacts) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(true, |x| x != "html") {
            continue;
        }
        let rel_path = path
            .strip_prefix(artifacts)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        match std::fs::read_to_string(path) {
            Ok(content) => issues.extend(check_html_structure(&rel_path, &content)),
            Err(e) => issues.push(format!("Cannot read {}: {}", rel_path, e)),
        }
        pages_checked += 1;
    }
    debug!(pages = pages_checked, "checked html structure");

    if pages_checked == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            "No HTML files found in artifacts directory",
        ));
        return Ok(report);
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} HTML pages pass structural validation", pages_checked),
        format!("HTML structure issues across {} pages checked", pages_checked),
        issues,
    ));
    Ok(report)
}

/// Checks a single page with string heuristics.
fn check_html_structure(path: &str, content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let required = [
        ("<title", "missing <title> element"),
        ("<main", "missing <main> element"),
        ("<nav", "missing <nav> element"),
        ("<footer", "missing <footer> element"),
        ("<html lang=", "<html> missing lang attribute"),
        ("href=\"#main-content\"", "missing skip link"),
    ];
    required
        .iter()
        .filter(|(needle, _)| !lower.contains(needle))
        .map(|(_, problem)| format!("{}: {}", path, problem))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_page_reports_every_problem() {
        let issues = check_html_structure("x.html", "<html><body></body></html>");
        assert_eq!(issues.len(), 6);
        assert!(issues[0].starts_with("x.html: missing <title>"));
    }

    #[test]
    fn missing_directory_warns() {
        let report = validate(Path::new("/nonexistent/coalition-site")).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.count(crate::Severity::Warning), 1);
    }
}
