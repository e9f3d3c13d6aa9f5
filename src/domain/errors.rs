//! Domain error types
//!
//! This module defines the error hierarchy for CampusCoffee.
//! All errors are domain-specific and don't expose third-party types.

use super::ids::{NodeId, PosId};
use thiserror::Error;

/// Main CampusCoffee error type
///
/// Every stage of the import pipeline returns this type, and each stage
/// propagates the errors of the stages it calls without rewriting them.
#[derive(Debug, Error)]
pub enum CampusCoffeeError {
    /// The OpenStreetMap node could not be obtained.
    ///
    /// Covers upstream absence as well as transport, timeout and payload
    /// parse failures; callers cannot tell them apart.
    #[error("The OpenStreetMap node with ID {0} does not exist.")]
    ExternalNodeNotFound(NodeId),

    /// The OpenStreetMap node lacks tags required to build a POS
    #[error(
        "The OpenStreetMap node with ID {node_id} is missing required fields: {}",
        fields.join(", ")
    )]
    MissingRequiredFields { node_id: NodeId, fields: Vec<String> },

    /// A POS with the same name already exists under a different identity
    #[error("A POS with the name '{0}' already exists.")]
    DuplicateName(String),

    /// No POS is stored under the given ID
    #[error("The POS with ID {0} does not exist.")]
    PosNotFound(PosId),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors (generic)
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Client-observable failure category
///
/// The boundary of the system (the CLI today) maps errors to these
/// categories instead of matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The requested node or record does not exist
    NotFound,
    /// The input cannot be turned into a valid record
    BadInput,
    /// The record collides with an existing one
    Conflict,
    /// Anything else
    Internal,
}

impl CampusCoffeeError {
    /// Returns the failure category surfaced to clients
    pub fn category(&self) -> ErrorCategory {
        match self {
            CampusCoffeeError::ExternalNodeNotFound(_) | CampusCoffeeError::PosNotFound(_) => {
                ErrorCategory::NotFound
            }
            CampusCoffeeError::MissingRequiredFields { .. } | CampusCoffeeError::Validation(_) => {
                ErrorCategory::BadInput
            }
            CampusCoffeeError::DuplicateName(_) => ErrorCategory::Conflict,
            _ => ErrorCategory::Internal,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CampusCoffeeError {
    fn from(err: std::io::Error) -> Self {
        CampusCoffeeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CampusCoffeeError {
    fn from(err: serde_json::Error) -> Self {
        CampusCoffeeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CampusCoffeeError {
    fn from(err: toml::de::Error) -> Self {
        CampusCoffeeError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_node_not_found_display() {
        let err = CampusCoffeeError::ExternalNodeNotFound(NodeId::new(5589879349));
        assert_eq!(
            err.to_string(),
            "The OpenStreetMap node with ID 5589879349 does not exist."
        );
    }

    #[test]
    fn test_missing_required_fields_display() {
        let err = CampusCoffeeError::MissingRequiredFields {
            node_id: NodeId::new(42),
            fields: vec!["name".to_string(), "addr:city".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "The OpenStreetMap node with ID 42 is missing required fields: name, addr:city"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            CampusCoffeeError::ExternalNodeNotFound(NodeId::new(1)).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            CampusCoffeeError::PosNotFound(PosId::new(1)).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            CampusCoffeeError::MissingRequiredFields {
                node_id: NodeId::new(1),
                fields: vec!["name".to_string()],
            }
            .category(),
            ErrorCategory::BadInput
        );
        assert_eq!(
            CampusCoffeeError::DuplicateName("Rada".to_string()).category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            CampusCoffeeError::Database("boom".to_string()).category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CampusCoffeeError = io_err.into();
        assert!(matches!(err, CampusCoffeeError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CampusCoffeeError = json_err.into();
        assert!(matches!(err, CampusCoffeeError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CampusCoffeeError = toml_err.into();
        assert!(matches!(err, CampusCoffeeError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = CampusCoffeeError::DuplicateName("Test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
