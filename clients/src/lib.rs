//! Shared plumbing for the Coalition Atlas binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use coalition_roster::Variant;
use coalition_website::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Installs the `fmt` subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_target(false)
        .init();
}

/// Filter for the given `RUST_LOG` value; `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Site options shared by every binary that builds a session or a site.
#[derive(Args, Debug, Default)]
pub struct SiteArgs {
    /// TOML site configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Browser variant (`full` or `restricted`); overrides the config file.
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Path prefix the site is served under; overrides the config file.
    #[arg(long)]
    pub base_path: Option<String>,
}

impl SiteArgs {
    /// Loads the config file if given, then applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::default(),
        };
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.trim_end_matches('/').to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = SiteArgs {
            config: None,
            variant: Some(Variant::Restricted),
            base_path: Some("/atlas/".to_string()),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.variant, Variant::Restricted);
        assert_eq!(config.base_path, "/atlas");
        assert_eq!(config.title, SiteConfig::default().title);
    }

    #[test]
    fn rust_log_replaces_the_default_level() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("coalition=loud")).to_string(), "info");
    }

    #[test]
    fn no_flags_is_default() {
        assert_eq!(SiteArgs::default().resolve().unwrap(), SiteConfig::default());
    }
}
