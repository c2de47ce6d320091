//! Site configuration, read from an optional TOML file.
//!
//! ```toml
//! title = "Justice Combinations"
//! base_url = "https://coalition-atlas.github.io"
//! base_path = "/atlas"
//! variant = "restricted"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use coalition_roster::Variant;
use serde::Deserialize;

/// Settings for one site build. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in the header and `<title>` suffix.
    pub title: String,
    /// Absolute origin used in `sitemap.xml`.
    pub base_url: String,
    /// Path prefix the site is served under, without a trailing slash.
    pub base_path: String,
    /// Which build of the browser to generate.
    pub variant: Variant,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Justice Combinations".to_string(),
            base_url: "https://coalition-atlas.github.io".to_string(),
            base_path: String::new(),
            variant: Variant::Full,
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names an unknown
    /// key or variant.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: SiteConfig =
            toml::from_str(text).context("Invalid site configuration")?;
        config.base_path = config.base_path.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read site configuration: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("In site configuration: {}", path.display()))
    }

    /// Prefixes a site-absolute path with `base_path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn parses_variant_and_trims_base_path() {
        let config =
            SiteConfig::from_toml_str("variant = \"restricted\"\nbase_path = \"/atlas/\"\n")
                .unwrap();
        assert_eq!(config.variant, Variant::Restricted);
        assert_eq!(config.base_path, "/atlas");
        assert_eq!(config.url("/sizes/3/"), "/atlas/sizes/3/");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(SiteConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(SiteConfig::from_toml_str("variant = \"partial\"").is_err());
    }
}
