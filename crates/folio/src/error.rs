//! Error types for folio.
//!
//! This module defines all error types used throughout the folio crate.
//! Remote fetch failures are deliberately absent: the resolution pipeline
//! degrades to static content instead of surfacing errors (see
//! [`crate::fetch`]).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Portfolio Errors ===
    /// Failed to load a portfolio document.
    #[error("failed to load portfolio from {path}: {source}")]
    PortfolioLoad {
        /// Path to the portfolio file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<figment::Error>,
    },

    /// Portfolio validation failed.
    #[error("invalid portfolio: {message}")]
    PortfolioValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// A project identifier did not match any portfolio entry.
    #[error("unknown project: {identifier}")]
    UnknownProject {
        /// The identifier that was looked up.
        identifier: String,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a portfolio validation error.
    #[must_use]
    pub fn portfolio_validation(message: impl Into<String>) -> Self {
        Self::PortfolioValidation {
            message: message.into(),
        }
    }

    /// Create an unknown-project error.
    #[must_use]
    pub fn unknown_project(identifier: impl Into<String>) -> Self {
        Self::UnknownProject {
            identifier: identifier.into(),
        }
    }

    /// Check if this error is an unknown-project lookup failure.
    #[must_use]
    pub fn is_unknown_project(&self) -> bool {
        matches!(self, Self::UnknownProject { .. })
    }
}
