//! Configuration file support for the portfolio CLI.
//!
//! Loads optional `portfolio.toml` from the working directory, or an explicit
//! file passed with `--config`. Values resolve as: CLI flag, then config
//! file, then built-in default.
//!
//! ```toml
//! title = "Jane Doe - Portfolio"
//! stylesheet = "https://cdn.example.com/bootstrap.min.css"
//! out_dir = "public"
//! ```

use std::path::{Path, PathBuf};

use portfolio_leptos::SiteOptions;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PortfolioError, Result};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "portfolio.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Document title
    pub title: Option<String>,
    /// Remote stylesheet URI
    pub stylesheet: Option<String>,
    /// Directory `build` writes into
    pub out_dir: Option<PathBuf>,
}

/// Page settings given on the command line; they win over the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteOverrides {
    /// `--title`
    pub title: Option<String>,
    /// `--stylesheet`
    pub stylesheet: Option<String>,
}

impl PortfolioConfig {
    /// Load `portfolio.toml` from `root`.
    ///
    /// A missing file yields the default config. An unreadable or invalid
    /// file is logged and also yields the default config.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Any failure is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PortfolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| PortfolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve page options from overrides, this config and defaults.
    pub fn site_options(&self, overrides: &SiteOverrides) -> SiteOptions {
        let defaults = SiteOptions::default();
        SiteOptions {
            title: overrides
                .title
                .clone()
                .or_else(|| self.title.clone())
                .unwrap_or(defaults.title),
            stylesheet_href: overrides
                .stylesheet
                .clone()
                .or_else(|| self.stylesheet.clone())
                .unwrap_or(defaults.stylesheet_href),
        }
    }

    /// Resolve the output directory: flag, then config, then `default`.
    pub fn out_dir(&self, flag: Option<&Path>, default: &Path) -> PathBuf {
        flag.or(self.out_dir.as_deref())
            .unwrap_or(default)
            .to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_leptos::styles::BOOTSTRAP_CDN;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(PortfolioConfig::load(temp.path()), PortfolioConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
title = "Jane Doe"
stylesheet = "https://example.com/site.css"
out_dir = "public"
"#,
        );

        let config = PortfolioConfig::load(temp.path());
        assert_eq!(config.title.as_deref(), Some("Jane Doe"));
        assert_eq!(config.stylesheet.as_deref(), Some("https://example.com/site.css"));
        assert_eq!(config.out_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_invalid_config_falls_back_on_implicit_load() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "title = [unclosed");
        assert_eq!(PortfolioConfig::load(temp.path()), PortfolioConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error_on_explicit_load() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), "title = [unclosed");

        let err = PortfolioConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigParse { .. }));
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), r#"titel = "typo""#);
        assert!(PortfolioConfig::load_from_path(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = PortfolioConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigRead { .. }));
    }

    #[test]
    fn test_precedence_flag_config_default() {
        let config = PortfolioConfig {
            title: Some("From Config".into()),
            stylesheet: None,
            out_dir: Some("public".into()),
        };

        let options = config.site_options(&SiteOverrides::default());
        assert_eq!(options.title, "From Config");
        assert_eq!(options.stylesheet_href, BOOTSTRAP_CDN);

        let options = config.site_options(&SiteOverrides {
            title: Some("From Flag".into()),
            stylesheet: Some("https://example.com/x.css".into()),
        });
        assert_eq!(options.title, "From Flag");
        assert_eq!(options.stylesheet_href, "https://example.com/x.css");

        let dist = Path::new("dist");
        assert_eq!(config.out_dir(None, dist), PathBuf::from("public"));
        assert_eq!(config.out_dir(Some(Path::new("out")), dist), PathBuf::from("out"));
        assert_eq!(PortfolioConfig::default().out_dir(None, dist), PathBuf::from("dist"));
    }
}
