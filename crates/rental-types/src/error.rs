//! Error types for car-rental

use thiserror::Error;

use crate::RecordId;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One message per failing rule, in field order
    #[error("Invalid {kind} data: {}", .messages.join(" "))]
    Validation {
        kind: &'static str,
        messages: Vec<String>,
    },

    #[error("{kind} not found with ID: {id}")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("Payment rejected: {0}")]
    Payment(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_rules() {
        let err = Error::Validation {
            kind: "car",
            messages: vec![
                "Make is required.".to_string(),
                "Seats must be positive.".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid car data: Make is required. Seats must be positive."
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound { kind: "Booking", id: 42 };
        assert_eq!(err.to_string(), "Booking not found with ID: 42");
    }
}
