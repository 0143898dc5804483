//! # Shipping Error Types
//!
//! Typed errors for the ambient layers of the shipping engine.
//! Rate calculation itself never fails: unrecognized stored values
//! degrade to "zero fee" / "not eligible" inside the settings enums.

use thiserror::Error;

/// Core error type for shipping engine operations
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Configuration errors (unreadable or unparsable settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No shipping method registered under the given id
    #[error("Shipping method not found: {method_id}")]
    MethodNotFound { method_id: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShippingError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ShippingError::Configuration(_) => 500,
            ShippingError::InvalidRequest(_) => 400,
            ShippingError::MethodNotFound { .. } => 404,
            ShippingError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for shipping engine operations
pub type ShippingResult<T> = Result<T, ShippingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ShippingError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(
            ShippingError::MethodNotFound {
                method_id: "x".into()
            }
            .status_code(),
            404
        );
        assert_eq!(
            ShippingError::Configuration("bad toml".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_display() {
        let err = ShippingError::MethodNotFound {
            method_id: "courier_overnight".into(),
        };
        assert_eq!(
            err.to_string(),
            "Shipping method not found: courier_overnight"
        );
    }
}
