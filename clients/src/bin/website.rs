//! `coalition-website` — Generates the Coalition Atlas static website.
//!
//! **Outputs (`public/`):**
//! - `index.html` — every size group (filter: all)
//! - `sizes/<k>/index.html` — one page per size filter
//! - `combinations/<slug>/index.html` — one detail page per combination
//! - `about.html`, `sitemap.xml`
//! - `data/combinations.json`, `data/roster.json`
//! - `css/style.css`, `js/browser.js`
//!
//! **Usage:**
//! ```
//! coalition-website [--out <path>] [--config <file>] [--variant full|restricted] [--base-path <prefix>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use coalition_clients::{init_logging, SiteArgs};
use coalition_website::generate;

/// Generate the Coalition Atlas static website.
#[derive(Parser)]
#[command(
    name = "coalition-website",
    about = "Generate the Coalition Atlas static website"
)]
struct Args {
    /// Output directory for the generated website.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    #[command(flatten)]
    site: SiteArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = args.site.resolve()?;

    generate(&config, &args.out)?;

    println!("Website generated successfully.");
    println!("  Variant: {}", config.variant.as_str());
    println!("  Output: {}", args.out.display());

    Ok(())
}
