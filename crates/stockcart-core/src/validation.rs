//! # Validation Module
//!
//! Input rules for the values the shell hands to the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Prompt loop (apps/cli)                                       │
//! │  ├── Parses the raw token (number / word)                              │
//! │  └── THIS MODULE: re-prompts until the value is acceptable             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Types (stockcart-core)                                       │
//! │  ├── ItemId::parse enforces identifier rules                           │
//! │  └── CartRegistry::new enforces the cart count range                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Container rules                                              │
//! │  ├── Unique identifiers (DuplicateKey)                                 │
//! │  └── Cart references only catalog items (ItemUnavailable)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockcart_core::validation::{validate_item_id, validate_quantity};
//!
//! assert!(validate_item_id("item001").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_ID_LEN, MAX_PRICE_CENTS, MAX_SHOPPING_CARTS, MAX_TITLE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_ID_LEN`] characters
/// - No whitespace (identifiers are read as single words)
///
/// ```rust
/// use stockcart_core::validation::validate_item_id;
///
/// assert!(validate_item_id("item001").is_ok());
/// assert!(validate_item_id("").is_err());
/// assert!(validate_item_id("item 001").is_err());
/// assert!(validate_item_id("item000001").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity to add to or deduct from a cart.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Menu 4: Insert/Add stock items to a shopping cart                      │
/// │                                                                         │
/// │  Add a quantity: 0                                                      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(0) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── qty == 0? → "Please enter a positive quantity", ask again     │
/// │       │                                                                 │
/// │       └── OK → Shop::add_to_cart                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents entered at the menu.
///
/// Prices are strictly positive and at most [`MAX_PRICE_CENTS`].
///
/// ```rust
/// use stockcart_core::validation::validate_price_cents;
/// use stockcart_core::MAX_PRICE_CENTS;
///
/// assert!(validate_price_cents(250).is_ok());
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates the number of carts requested at startup (1..=10).
pub fn validate_cart_count(count: usize) -> ValidationResult<()> {
    if count == 0 || count > MAX_SHOPPING_CARTS {
        return Err(ValidationError::OutOfRange {
            field: "number of shopping carts".to_string(),
            min: 1,
            max: MAX_SHOPPING_CARTS as i64,
        });
    }

    Ok(())
}

/// Validates a cart index against the registry size.
pub fn validate_cart_index(index: usize, count: usize) -> ValidationResult<()> {
    if index >= count {
        return Err(ValidationError::OutOfRange {
            field: "shopping cart ID".to_string(),
            min: 0,
            max: count as i64 - 1,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("item001").is_ok());
        assert!(validate_item_id("A").is_ok());
        assert!(validate_item_id(&"x".repeat(MAX_ID_LEN)).is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("has space").is_err());
        assert!(validate_item_id(&"x".repeat(MAX_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Milk").is_ok());
        assert!(validate_title("Whole Milk 1L").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(u32::MAX).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-1).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert_eq!(
            validate_price_cents(i64::MAX / 2),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_PRICE_CENTS,
            })
        );
    }

    #[test]
    fn test_validate_cart_count() {
        assert!(validate_cart_count(1).is_ok());
        assert!(validate_cart_count(MAX_SHOPPING_CARTS).is_ok());
        assert!(validate_cart_count(0).is_err());
        assert!(validate_cart_count(MAX_SHOPPING_CARTS + 1).is_err());
    }

    #[test]
    fn test_validate_cart_index() {
        assert!(validate_cart_index(0, 3).is_ok());
        assert!(validate_cart_index(2, 3).is_ok());

        let err = validate_cart_index(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "shopping cart ID must be between 0 and 2");
    }
}
