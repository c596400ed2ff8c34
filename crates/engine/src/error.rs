//! Error types for document requests and configuration
//!
//! Elision below the root is not an error and never appears here. Only a
//! root that cannot be represented surfaces, as
//! [`DocumentError::InvalidResource`], which callers must be able to tell
//! apart from [`DocumentError::NotFound`]. It carries the root's
//! [`Elision`] so callers can see which required children were missing.

use std::path::PathBuf;

use dataspace_core::EntityRef;
use thiserror::Error;

use crate::elision::Elision;

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Why a requested entity could not be found
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFound {
    /// The external id is not a self-link issued by this service
    #[error("not a self-link of this connector: {0}")]
    Link(String),

    /// The id resolved, but no live entity exists for it
    #[error("no live entity {0}")]
    Entity(EntityRef),
}

/// Errors returned to callers of the resolver
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Unknown or deleted entity
    #[error("not found: {0}")]
    NotFound(#[from] NotFound),

    /// The root exists but its own validity rule elides it
    #[error("entity exists but cannot be represented: {0}")]
    InvalidResource(Elision),
}

impl DocumentError {
    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound(_))
    }

    /// True for `InvalidResource`
    pub fn is_invalid_resource(&self) -> bool {
        matches!(self, DocumentError::InvalidResource(_))
    }

    /// Why the root was elided, for `InvalidResource`
    pub fn elision(&self) -> Option<&Elision> {
        match self {
            DocumentError::InvalidResource(elision) => Some(elision),
            DocumentError::NotFound(_) => None,
        }
    }
}

/// Errors from loading or validating `dataspace.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file could not be written
    #[error("failed to write config file '{}': {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A URL setting is unusable
    #[error("invalid {field} '{url}': {reason}")]
    InvalidUrl {
        /// Setting name
        field: &'static str,
        /// Configured value
        url: String,
        /// What is wrong with it
        reason: String,
    },

    /// `default_language` is not a known language code
    #[error("unknown default_language '{0}'")]
    UnknownLanguage(String),
}
