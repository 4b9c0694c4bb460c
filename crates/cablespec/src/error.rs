//! Error types for cablespec.
//!
//! All fallible operations in the library return [`Result`], which wraps
//! [`CableSpecError`]:
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Preserve error chains with `#[source]` attributes
//! - Include context in error messages (file paths, pattern text, etc.)
//!
//! **System errors always bubble up unchanged:** `CableSpecError::Io` (from
//! `std::io::Error`) indicates a real filesystem problem and is never wrapped
//! or suppressed.
//!
//! **Degraded input is not an error.** A datasheet that yields nothing, or a
//! field too garbled to trust, is represented inside the data model
//! (unverifiable fields, violations, a `Rejected` verdict) rather than as an
//! `Err`. Errors are reserved for misuse of the library itself: unreadable
//! files, malformed configuration, invalid user-supplied patterns.
//!
//! # Example
//!
//! ```rust
//! use cablespec::{CableSpecError, Result};
//!
//! fn load_datasheet(path: &str) -> Result<String> {
//!     // IO errors bubble up automatically via ?
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.is_empty() {
//!         return Err(CableSpecError::config(format!("file is empty: {}", path)));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `CableSpecError`.
///
/// This is the standard return type for all fallible operations in cablespec.
pub type Result<T> = std::result::Result<T, CableSpecError>;

/// Main error type for all cablespec operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Pattern` - Invalid user-supplied extraction patterns
/// - `Config` - Malformed or invalid configuration
/// - `Serialization` - JSON/TOML serialization errors
/// - `Other` - Catch-all for uncommon errors
#[derive(Debug, Error)]
pub enum CableSpecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {message}")]
    Pattern {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CableSpecError {
    fn from(err: serde_json::Error) -> Self {
        CableSpecError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<regex::Error> for CableSpecError {
    fn from(err: regex::Error) -> Self {
        CableSpecError::Pattern {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CableSpecError {
    /// Create a Pattern error
    pub fn pattern<S: Into<String>>(message: S) -> Self {
        Self::Pattern {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Pattern error with source
    pub fn pattern_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Pattern {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Config error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Config error with source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a Serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }
}
