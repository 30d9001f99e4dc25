//! # Error Types
//!
//! Domain-specific error types for stockcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockcart-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog / cart rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CommandError     - What the menu prints (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CommandError → terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the identifier in every message
//! 3. A failed operation never leaves a partial mutation behind

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures of catalog and cart operations.
///
/// Every variant is an expected outcome of caller input. None of them is
/// fatal; the caller reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No catalog entry (or no cart line) exists for the identifier.
    #[error("Item not found: {id}")]
    NotFound { id: String },

    /// Insert with an identifier that is already in the catalog.
    #[error("Item {id} already exists")]
    DuplicateKey { id: String },

    /// Deduction would take a cart line below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart 0: item001 x 2
    ///      │
    ///      ▼
    /// deduct(item001, 5)
    ///      │
    ///      ▼
    /// NegativeResult { id: "item001", current: 2, requested: 5 }
    ///      │
    ///      ▼
    /// Cart unchanged: item001 x 2
    /// ```
    #[error("Cannot deduct {requested} of {id}: only {current} in cart")]
    NegativeResult {
        id: String,
        current: u32,
        requested: u32,
    },

    /// Add-to-cart referenced an identifier the catalog does not hold.
    #[error("Item {id} is not available in the catalog")]
    ItemUnavailable { id: String },

    /// Accumulating a quantity would overflow the line counter.
    #[error("Quantity of {id} would overflow")]
    QuantityOverflow { id: String },

    /// A line total or cart total does not fit in the money type.
    #[error("Cart total is too large to compute")]
    TotalOverflow,

    /// Cart index outside the registry.
    #[error("Cart {index} does not exist ({count} carts available)")]
    CartOutOfRange { index: usize, count: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn not_found(id: &str) -> Self {
        CoreError::NotFound { id: id.to_string() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`validation`](crate::validation) helpers and by
/// constructors such as [`ItemId::parse`](crate::ItemId::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., embedded whitespace).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
