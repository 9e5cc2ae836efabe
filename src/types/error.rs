//! Unified Error Type System
//!
//! Centralized error type for the whole crate.
//!
//! Extraction, classification and rendering never fail: missing fields
//! degrade to empty values or omitted sections. Errors only come from the
//! edges of the tool (configuration, operator input, the editor, delivery).

use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum WarRoomError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Edge Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    /// Transport-level failure talking to the webhook. HTTP status codes are
    /// never mapped here; the caller receives them as-is.
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, WarRoomError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl WarRoomError {
    /// Create a delivery error
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }

    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Whether the operator can fix this by supplying different input
    pub fn is_operator_error(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Config(_) | Self::Editor(_))
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Wrap an error as a configuration error with context
    fn config_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn config_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| WarRoomError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WarRoomError::delivery("connection refused");
        assert_eq!(err.to_string(), "Delivery failed: connection refused");

        let err = WarRoomError::Config("missing webhook url".to_string());
        assert_eq!(err.to_string(), "Config error: missing webhook url");
    }

    #[test]
    fn test_operator_error() {
        assert!(WarRoomError::input("bad link").is_operator_error());
        assert!(WarRoomError::Editor("vi not found".to_string()).is_operator_error());
        assert!(!WarRoomError::delivery("timed out").is_operator_error());
    }

    #[test]
    fn test_config_context() {
        let parsed: std::result::Result<u8, _> = "nope".parse::<u8>();
        let err = parsed.config_context("services.links.vrf").unwrap_err();
        assert!(matches!(err, WarRoomError::Config(_)));
        assert!(err.to_string().starts_with("Config error: services.links.vrf:"));
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WarRoomError = io.into();
        assert!(matches!(err, WarRoomError::Io(_)));
    }
}
