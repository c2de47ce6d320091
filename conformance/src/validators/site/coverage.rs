//! Website coverage validator.
//!
//! Reads `data/roster.json` to learn which variant was rendered, then checks:
//! - one page per size filter under `sizes/<k>/index.html`
//! - one detail page per combination under `combinations/<slug>/index.html`
//! - `data/combinations.json` lists every combination
//! - each size group header on `index.html` reads `<name> (<x> of <y> occurred)`
//!   with `y = C(n, k)` and `x` the number of occurred combinations of size `k`
//! - `about.html` and `sitemap.xml` are present

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use coalition_roster::{binomial, Variant};
use regex::Regex;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/coverage";

/// Validates that every filter state and combination has a page.
///
/// # Errors
///
/// Returns an error if an artifact file cannot be read or parsed.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let export_path = artifacts.join("data").join("roster.json");
    if !export_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            "data/roster.json not found in output",
        ));
        return Ok(report);
    }
    let export = read_json(&export_path)?;
    let variant: Variant = export["variant"]
        .as_str()
        .ok_or_else(|| anyhow!("data/roster.json has no variant"))?
        .parse()?;
    let roster_size = export["justices"].as_array().map_or(0, Vec::len);
    let combinations = export["combinations"]
        .as_array()
        .ok_or_else(|| anyhow!("data/roster.json has no combinations"))?;

    check_size_pages(artifacts, variant, &mut report);
    check_combination_pages(artifacts, combinations, &mut report);
    check_index(artifacts, combinations.len(), &mut report)?;
    check_headers(artifacts, roster_size, combinations, &mut report)?;
    check_static_pages(artifacts, &mut report);

    Ok(report)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn check_size_pages(artifacts: &Path, variant: Variant, report: &mut ConformanceReport) {
    let missing: Vec<String> = variant
        .size_range()
        .map(|k| format!("sizes/{k}/index.html"))
        .filter(|rel| !artifacts.join(rel).exists())
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} size pages present", variant.size_range().count()),
        "Missing size pages",
        missing,
    ));
}

fn check_combination_pages(artifacts: &Path, combinations: &[Value], report: &mut ConformanceReport) {
    let missing: Vec<String> = combinations
        .iter()
        .filter_map(|c| c["key"].as_str())
        .map(|key| format!("combinations/{}/index.html", key.replace(',', "-")))
        .filter(|rel| !artifacts.join(rel).exists())
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} combination pages present", combinations.len()),
        "Missing combination pages",
        missing,
    ));
}

fn check_index(artifacts: &Path, expected: usize, report: &mut ConformanceReport) -> Result<()> {
    let index_path = artifacts.join("data").join("combinations.json");
    if !index_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            "data/combinations.json not found in output",
        ));
        return Ok(());
    }
    let index = read_json(&index_path)?;
    let listed = index.as_array().map_or(0, Vec::len);
    if listed == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("data/combinations.json lists all {expected} combinations"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("data/combinations.json lists {listed} of {expected} combinations"),
        ));
    }
    Ok(())
}

fn check_headers(
    artifacts: &Path,
    roster_size: usize,
    combinations: &[Value],
    report: &mut ConformanceReport,
) -> Result<()> {
    let home_path = artifacts.join("index.html");
    let home = std::fs::read_to_string(&home_path)
        .with_context(|| format!("Failed to read {}", home_path.display()))?;

    let mut occurred: BTreeMap<u64, usize> = BTreeMap::new();
    for c in combinations {
        if let (Some(size), Some(true)) = (c["size"].as_u64(), c["occurred"].as_bool()) {
            *occurred.entry(size).or_default() += 1;
        }
    }

    let section = Regex::new(
        r#"data-size="(\d+)">\s*<h2 class="size-group-header">([^<]+)</h2>"#,
    )?;
    let header = Regex::new(r"^.+ \((\d+) of (\d+) occurred\)$")?;

    let mut issues = Vec::new();
    let mut groups = 0usize;
    for caps in section.captures_iter(&home) {
        groups += 1;
        let size: u64 = caps[1].parse()?;
        let text = &caps[2];
        let Some(counts) = header.captures(text) else {
            issues.push(format!("size {size}: malformed header {text:?}"));
            continue;
        };
        let x: usize = counts[1].parse()?;
        let y: usize = counts[2].parse()?;
        let expected_y = usize::try_from(size).map_or(0, |k| binomial(roster_size, k));
        let expected_x = occurred.get(&size).copied().unwrap_or(0);
        if y != expected_y {
            issues.push(format!("size {size}: header total {y}, expected {expected_y}"));
        }
        if x != expected_x {
            issues.push(format!("size {size}: header occurred {x}, expected {expected_x}"));
        }
    }
    if groups == 0 {
        issues.push("index.html has no size group headers".to_string());
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {groups} size group headers carry correct counts"),
        "Size group headers disagree with the data",
        issues,
    ));
    Ok(())
}

fn check_static_pages(artifacts: &Path, report: &mut ConformanceReport) {
    let missing: Vec<String> = ["about.html", "sitemap.xml", "css/style.css", "js/browser.js"]
        .iter()
        .filter(|rel| !artifacts.join(rel).exists())
        .map(|rel| (*rel).to_string())
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        "About page, sitemap and assets present",
        "Missing static files",
        missing,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_export_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = validate(dir.path()).unwrap();
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn wrong_header_counts_fail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<section class=\"size-group\" data-size=\"2\">\n\
             <h2 class=\"size-group-header\">Pairs (2 Justices) (3 of 35 occurred)</h2>\n",
        )
        .unwrap();
        let combinations = vec![serde_json::json!({"key": "0,1", "size": 2, "occurred": true})];
        let mut report = ConformanceReport::new();
        check_headers(dir.path(), 9, &combinations, &mut report).unwrap();
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].details.len(), 2);
    }
}
