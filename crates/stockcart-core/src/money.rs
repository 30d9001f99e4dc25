//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Milk 250 cents × 3 = 750 cents  → "$7.50"                            │
//! │    Only the display layer ever splits dollars from cents               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation that can grow a value is checked: a line total or cart
//! total that does not fit in `i64` comes back as `None` instead of
//! wrapping. Formatting for display lives in the CLI configuration.
//!
//! ## Usage
//! ```rust
//! use stockcart_core::money::Money;
//!
//! let price = Money::from_cents(250); // $2.50
//! let line = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.cents(), 750);
//! assert!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3).is_none());
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use stockcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts; `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a cart quantity; `None` on overflow.
    ///
    /// ## User Workflow
    /// ```text
    /// Catalog: item001 Milk $2.50
    /// Cart 0:  item001 x 3
    ///      │
    ///      ▼
    /// checked_mul_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $7.50
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
