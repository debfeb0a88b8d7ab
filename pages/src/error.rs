//! Errors for the host-facing surface (routing, config, export).
//!
//! Rendering a page never fails; only resolving a path and touching the
//! filesystem do.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while resolving, configuring or writing pages.
#[derive(Debug, Error)]
pub enum PageError {
    /// No page is registered under the requested path.
    #[error("no page is registered for route '{0}'")]
    UnknownRoute(String),

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A site config file is not valid TOML for [`crate::config::SiteConfig`].
    #[error("failed to parse {}: {source}", .path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
}

/// Result alias for fallible page operations.
pub type Result<T> = std::result::Result<T, PageError>;

impl PageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PageError::Io {
            path: path.into(),
            source,
        }
    }
}
