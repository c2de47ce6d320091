//! `coalition-conformance` — Validates the literal tables and a generated site.
//!
//! Runs the complete conformance suite across:
//! - Roster and occurrence tables (ids, keys, records, C(n, k) per size)
//! - Website artifacts (HTML structure, page coverage, header counts)
//!
//! **Usage:**
//! ```
//! coalition-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use coalition_clients::init_logging;
use coalition_conformance::{run_all, Severity, SitePaths};

/// Run the Coalition Atlas conformance suite.
#[derive(Parser)]
#[command(
    name = "coalition-conformance",
    about = "Validate the Coalition Atlas tables and generated site"
)]
struct Args {
    /// Path to the generated site (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let report = run_all(&SitePaths {
        artifacts: args.artifacts,
    })?;

    println!("Coalition Atlas Conformance Report");
    println!("==================================");
    println!();

    for result in &report.results {
        println!(
            "[{}] {}: {}",
            result.severity.tag(),
            result.validator,
            result.message
        );
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
