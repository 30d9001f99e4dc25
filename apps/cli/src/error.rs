//! # CLI Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in stockcart                              │
//! │                                                                         │
//! │  Session (menu loop)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │  CoreError::DuplicateKey ──► CommandError { DUPLICATE_KEY, .. } │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  printed, logged with warn!, menu continues                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  SessionError (I/O, end of input) ends the loop instead.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use serde::Serialize;
use stockcart_core::CoreError;
use thiserror::Error;

/// A failed menu command, ready to print.
///
/// In `--json` mode this is what gets written:
/// ```json
/// {
///   "code": "DUPLICATE_KEY",
///   "message": "Failed to insert item001",
///   "reason": "Item item001 already exists"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// What the command was trying to do
    pub message: String,

    /// Why it did not happen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or cart line does not exist
    NotFound,

    /// Identifier already in the catalog
    DuplicateKey,

    /// Deduction larger than the cart quantity
    NegativeResult,

    /// Cart refers to an item the catalog does not hold
    ItemUnavailable,

    /// Quantity or cart total would overflow
    Overflow,

    /// Cart index outside the registry
    InvalidCart,

    /// Input validation failed
    ValidationError,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
            reason: None,
        }
    }

    /// Replaces the message with what the command was doing, keeping the
    /// original message as the reason.
    pub fn context(mut self, message: impl Into<String>) -> Self {
        let reason = std::mem::replace(&mut self.message, message.into());
        self.reason = Some(reason);
        self
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::NotFound { .. } => ErrorCode::NotFound,
            CoreError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            CoreError::NegativeResult { .. } => ErrorCode::NegativeResult,
            CoreError::ItemUnavailable { .. } => ErrorCode::ItemUnavailable,
            CoreError::QuantityOverflow { .. } | CoreError::TotalOverflow => ErrorCode::Overflow,
            CoreError::CartOutOfRange { .. } => ErrorCode::InvalidCart,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        CommandError::new(code, err.to_string())
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}: {}", self.message, reason),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for CommandError {}

/// Convenience alias for command results.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that end the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input stream closed before the user chose to exit.
    #[error("end of input")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Startup failed in the core (e.g. invalid cart count).
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: CommandError = CoreError::DuplicateKey {
            id: "item001".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(err.to_string(), "Item item001 already exists");
    }

    #[test]
    fn test_context_keeps_reason() {
        let err = CommandError::from(CoreError::NegativeResult {
            id: "item001".to_string(),
            current: 1,
            requested: 2,
        })
        .context("Failed to deduct quantity item001");

        assert_eq!(
            err.to_string(),
            "Failed to deduct quantity item001: Cannot deduct 2 of item001: only 1 in cart"
        );

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NEGATIVE_RESULT");
        assert_eq!(json["message"], "Failed to deduct quantity item001");
    }
}
