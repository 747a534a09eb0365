//! # ValidationError
//!
//! The single failure kind of the payload validator.
//! Always keyed by the offending field so callers can point the user at it.

use serde::Serialize;
use thiserror::Error;

/// Why a submitted payload was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// JSON name of the rejected field (e.g. `caption`, `sharedWith`)
    pub field: &'static str,
    /// Human-readable reason, safe to show to the client
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::new(field, format!("{field} missing"))
    }

    pub(crate) fn too_long(field: &'static str) -> Self {
        Self::new(field, format!("{field} too long"))
    }
}

/// A specialized Result type for payload validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_and_message() {
        let err = ValidationError::too_long("caption");
        assert_eq!(err.to_string(), "caption: caption too long");
    }

    #[test]
    fn serializes_as_field_message_pair() {
        let err = ValidationError::new("sharedWith", "at least one recipient required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "sharedWith",
                "message": "at least one recipient required"
            })
        );
    }
}
