//! `coalition-build` — Exports the combination universe of each variant as JSON.
//!
//! **Outputs:**
//! - `<out>/coalitions.full.json`
//! - `<out>/coalitions.restricted.json`
//!
//! **Usage:**
//! ```
//! coalition-build [--out <path>] [--variant full|restricted]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coalition_clients::init_logging;
use coalition_roster::serializer::json::to_json;
use coalition_roster::{Session, Variant};
use tracing::info;

/// Export the Coalition Atlas data files.
#[derive(Parser)]
#[command(name = "coalition-build", about = "Export Coalition Atlas data files")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Export a single variant instead of both.
    #[arg(long)]
    variant: Option<Variant>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let variants = match args.variant {
        Some(variant) => vec![variant],
        None => vec![Variant::Full, Variant::Restricted],
    };

    for variant in variants {
        let session = Session::new(variant)?;
        let stats = session.statistics();
        println!(
            "{} variant: {} combinations, {} occurred",
            variant.as_str(),
            stats.total_combinations,
            stats.occurred_count
        );

        let path = out.join(format!("coalitions.{}.json", variant.as_str()));
        let json = serde_json::to_string_pretty(&to_json(&session))
            .context("Failed to serialize combination export")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote export");
    }

    Ok(())
}
