//! Unified error types for catalog-browser.
//!
//! Catalog loading and configuration are the only fallible stages; everything
//! that happens after the catalog is in memory is infallible by construction.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ProductId;

/// Main error type for catalog-browser operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors while decoding a catalog document
    #[error("Failed to parse catalog: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Two products share an identifier
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product is missing text that every card displays
    #[error("Product {id} has an empty {field}")]
    EmptyField { id: ProductId, field: &'static str },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Convenient Result type for catalog-browser operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: impl Into<ParseErrorKind>) -> Self {
        Self::Parse {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error came from reading or decoding the catalog file.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = CatalogError::DuplicateId(ProductId(7));
        assert_eq!(err.to_string(), "Duplicate product id 7");
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = CatalogError::parse("at products.json", json_err);
        assert!(err.to_string().contains("products.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_load_error());
    }

    #[test]
    fn test_io_error_has_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CatalogError::io("/tmp/none.json", io);
        match err {
            CatalogError::Io { path, message, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/none.json")));
                assert_eq!(message, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
