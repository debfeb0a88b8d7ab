//! Site configuration for the document renderer.
//!
//! Loads optional `.foodgram/pages.toml` from the site root.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{PageError, Result};

/// Document-level settings applied around every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Value of `<html lang>`
    pub lang: String,
    /// Value of `og:site_name`
    pub site_name: String,
    /// Embed [`crate::styles::PAGE_CSS`] in a `<style>` element
    pub inline_css: bool,
    /// External stylesheet to link, e.g. the frontend bundle
    pub stylesheet_href: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "ru".into(),
            site_name: "Фудграм".into(),
            inline_css: true,
            stylesheet_href: None,
        }
    }
}

impl SiteConfig {
    /// Load config from `.foodgram/pages.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".foodgram").join("pages.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default site config", e);
                Self::default()
            }
        }
    }

    /// Read config from `path`, failing if it is missing or malformed.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PageError::io(path, e))?;
        toml::from_str(&content).map_err(|source| PageError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) -> std::path::PathBuf {
        let dir = root.join(".foodgram");
        std::fs::create_dir_all(&dir).expect("create .foodgram");
        let path = dir.join("pages.toml");
        std::fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.lang, "ru");
        assert_eq!(config.site_name, "Фудграм");
        assert!(config.inline_css);
        assert!(config.stylesheet_href.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(SiteConfig::load(temp.path()), SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            temp.path(),
            r#"
inline_css = false
stylesheet_href = "/static/css/main.css"
"#,
        );

        let config = SiteConfig::load(temp.path());
        assert!(!config.inline_css);
        assert_eq!(config.stylesheet_href.as_deref(), Some("/static/css/main.css"));
        assert_eq!(config.lang, "ru");
    }

    #[test]
    fn test_load_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        write_config(temp.path(), "inline_css = \"sometimes\"");

        assert_eq!(SiteConfig::load(temp.path()), SiteConfig::default());
    }

    #[test]
    fn test_read_is_strict() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(temp.path(), "lang = [");

        let err = SiteConfig::read(&path).expect_err("malformed toml");
        assert!(matches!(err, PageError::Config { .. }));

        let missing = temp.path().join("absent.toml");
        let err = SiteConfig::read(&missing).expect_err("missing file");
        assert!(matches!(err, PageError::Io { .. }));
    }
}
