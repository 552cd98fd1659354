//! Error types for the Wayfarer planner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Wayfarer planner.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
///
/// Local validation failures (`LimitExceeded`, `InvalidOperation`,
/// `NotFound`) are raised before any remote call is attempted. Every remote
/// failure collapses into `RemoteUnavailable` because callers cannot
/// usefully distinguish a timeout from an auth or server error.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum WayfarerError {
    /// The day count is at the configured maximum
    #[error("Day limit reached: the plan already has {limit} days")]
    LimitExceeded { limit: u32 },

    /// Operation not valid for the current state (e.g. removing the last day)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Any failure from a remote store (network, auth, server error)
    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    /// A multi-step remote operation in which only some steps succeeded
    #[error("Partial failure: {failed} of {attempted} updates failed")]
    PartialFailure { attempted: usize, failed: usize },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WayfarerError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a LimitExceeded error
    pub fn limit_exceeded(limit: u32) -> Self {
        Self::LimitExceeded { limit }
    }

    /// Creates an InvalidOperation error
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a RemoteUnavailable error
    pub fn remote_unavailable(message: impl Into<String>) -> Self {
        Self::RemoteUnavailable(message.into())
    }

    /// Creates a PartialFailure error
    pub fn partial_failure(attempted: usize, failed: usize) -> Self {
        Self::PartialFailure { attempted, failed }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a LimitExceeded error
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a RemoteUnavailable error
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, Self::RemoteUnavailable(_))
    }

    /// Check if this is a PartialFailure error
    pub fn is_partial_failure(&self) -> bool {
        matches!(self, Self::PartialFailure { .. })
    }

    /// Check if this error came from local validation rather than a remote
    /// call.
    ///
    /// Returns true for:
    /// - `LimitExceeded`
    /// - `InvalidOperation`
    /// - `NotFound`
    ///
    /// UIs show these inline next to the triggering control; everything else
    /// belongs in a dismissible failure banner.
    pub fn is_local_validation(&self) -> bool {
        matches!(
            self,
            Self::LimitExceeded { .. } | Self::InvalidOperation(_) | Self::NotFound { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for WayfarerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for WayfarerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WayfarerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for WayfarerError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (used at the application-layer boundary)
impl From<anyhow::Error> for WayfarerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for WayfarerError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, WayfarerError>`.
pub type Result<T> = std::result::Result<T, WayfarerError>;
