//! Configuration management for folio.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default portfolio document file name.
const PORTFOLIO_FILE_NAME: &str = "portfolio.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "folio";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FOLIO_`, sections split on `__`)
/// 2. TOML config file at `~/.config/folio/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote description fetching configuration.
    pub fetch: FetchConfig,
    /// Portfolio document configuration.
    pub portfolio: PortfolioConfig,
    /// Rendering configuration.
    pub display: DisplayConfig,
}

/// Remote description fetching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the raw-content host.
    pub content_host: String,
    /// Branch names to try, in fixed priority order.
    pub branches: Vec<String>,
    /// Maximum length of the short-form preview, in characters.
    pub preview_limit: usize,
}

/// Portfolio document configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Path to the portfolio TOML file.
    /// Defaults to `~/.config/folio/portfolio.toml` when present; the
    /// compiled-in sample portfolio is used otherwise.
    pub path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum rendered width for section rules.
    pub width: usize,
    /// Include the testimonials section in full renders.
    pub testimonials: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            content_host: "https://raw.githubusercontent.com".to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            preview_limit: 150,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 72,
            testimonials: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FOLIO_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default portfolio document path.
    #[must_use]
    pub fn default_portfolio_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(PORTFOLIO_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.content_host.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "fetch.content_host must not be empty".to_string(),
            });
        }

        if self.fetch.branches.is_empty() {
            return Err(Error::ConfigValidation {
                message: "fetch.branches must name at least one branch".to_string(),
            });
        }

        if self.fetch.branches.iter().any(|b| b.trim().is_empty()) {
            return Err(Error::ConfigValidation {
                message: "fetch.branches must not contain empty names".to_string(),
            });
        }

        if self.display.width < 20 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "display.width ({}) is too narrow to render anything useful",
                    self.display.width
                ),
            });
        }

        Ok(())
    }

    /// Get the portfolio document path, if one is configured or present
    /// at the default location.
    #[must_use]
    pub fn portfolio_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.portfolio.path {
            return Some(path.clone());
        }
        let default = Self::default_portfolio_path();
        default.exists().then_some(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.fetch.content_host, "https://raw.githubusercontent.com");
        assert_eq!(config.fetch.branches, vec!["main", "master"]);
        assert_eq!(config.fetch.preview_limit, 150);
        assert!(config.portfolio.path.is_none());
    }

    #[test]
    fn test_default_display_config() {
        let display = DisplayConfig::default();

        assert_eq!(display.width, 72);
        assert!(display.testimonials);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.fetch.content_host = "  ".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("content_host"));
    }

    #[test]
    fn test_validate_no_branches() {
        let mut config = Config::default();
        config.fetch.branches.clear();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("branches"));
    }

    #[test]
    fn test_validate_blank_branch_name() {
        let mut config = Config::default();
        config.fetch.branches = vec!["main".to_string(), String::new()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_narrow_width() {
        let mut config = Config::default();
        config.display.width = 10;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("width"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[fetch]\nbranches = [\"trunk\"]\npreview_limit = 80\n\n[display]\nwidth = 60\n"
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.fetch.branches, vec!["trunk"]);
        assert_eq!(config.fetch.preview_limit, 80);
        assert_eq!(config.display.width, 60);
        // Untouched keys keep their defaults
        assert_eq!(config.fetch.content_host, "https://raw.githubusercontent.com");
        assert!(config.display.testimonials);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[fetch]\nbranches = []\n").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("folio"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_portfolio_path() {
        let path = Config::default_portfolio_path();
        assert!(path.to_string_lossy().contains("portfolio.toml"));
    }

    #[test]
    fn test_portfolio_path_explicit() {
        let mut config = Config::default();
        config.portfolio.path = Some(PathBuf::from("/custom/portfolio.toml"));

        assert_eq!(
            config.portfolio_path(),
            Some(PathBuf::from("/custom/portfolio.toml"))
        );
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("content_host"));
        assert!(json.contains("preview_limit"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
