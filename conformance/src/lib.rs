//! Coalition Atlas conformance suite.
//!
//! Validates the compiled-in roster and occurrence tables, and the static
//! site rendered from them.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Roster table | dense ids, single titled chief |
//! | Occurrence table | canonical unique keys, typed and dated records |
//! | Combination universe | C(n, k) per size, for each variant |
//! | Website | HTML structure, page coverage, size group header counts |
//!
//! # Entry Point
//!
//! ```no_run
//! use coalition_conformance::{SitePaths, run_all};
//! use std::path::PathBuf;
//!
//! let paths = SitePaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
pub struct SitePaths {
    /// Directory containing the generated site (index.html, data/, ...).
    pub artifacts: PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Literal table inventory (operates on live tables, no file I/O)
/// 2. Website HTML structure
/// 3. Website coverage
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &SitePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::data::inventory::validate());
    report.extend(validators::site::html::validate(&paths.artifacts)?);
    report.extend(validators::site::coverage::validate(&paths.artifacts)?);

    tracing::info!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coalition_roster::Variant;
    use coalition_website::{generate, SiteConfig};

    fn assert_no_failures(report: &ConformanceReport) {
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    }

    #[test]
    fn generated_full_site_conforms() {
        let dir = tempfile::tempdir().unwrap();
        generate(&SiteConfig::default(), dir.path()).unwrap();
        let report = run_all(&SitePaths {
            artifacts: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_no_failures(&report);
        assert_eq!(report.count(Severity::Warning), 0);
    }

    #[test]
    fn generated_restricted_site_conforms() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            variant: Variant::Restricted,
            ..SiteConfig::default()
        };
        generate(&config, dir.path()).unwrap();
        let report = run_all(&SitePaths {
            artifacts: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_no_failures(&report);
    }

    #[test]
    fn deleted_detail_page_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        generate(&SiteConfig::default(), dir.path()).unwrap();
        std::fs::remove_file(dir.path().join("combinations/0-6/index.html")).unwrap();
        let report = validators::site::coverage::validate(dir.path()).unwrap();
        assert_eq!(report.failure_count(), 1);
        let failure = report.results.iter().find(|r| r.is_failure()).unwrap();
        assert_eq!(failure.details, vec!["combinations/0-6/index.html".to_string()]);
    }
}
