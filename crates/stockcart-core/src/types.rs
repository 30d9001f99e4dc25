//! # Domain Types
//!
//! Core domain types shared by the catalog and the carts.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                       │
//! │  │   StockItem     │          │    CartLine     │                       │
//! │  │  ─────────────  │  keyed   │  ─────────────  │                       │
//! │  │  id (ItemId) ◄──┼──────────┼─ item_id        │                       │
//! │  │  title          │   by     │  quantity (>0)  │                       │
//! │  │  price (Money)  │          └─────────────────┘                       │
//! │  └─────────────────┘                                                    │
//! │   owned by Catalog              owned by one Cart                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A cart line never copies the item. It stores the [`ItemId`] and reads the
//! price from the catalog whenever a total is computed.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_id, ValidationResult};

// =============================================================================
// Item Identifier
// =============================================================================

/// Business key of a stock item (e.g. `item001`).
///
/// Ordering is byte-wise lexicographic, which is the order both the catalog
/// and every cart iterate in. `ItemId` borrows as `str`, so containers keyed
/// by it can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Parses and validates an identifier.
    ///
    /// ```rust
    /// use stockcart_core::ItemId;
    ///
    /// let id = ItemId::parse("item001").unwrap();
    /// assert_eq!(id.as_str(), "item001");
    /// assert!(ItemId::parse("").is_err());
    /// ```
    pub fn parse(id: &str) -> ValidationResult<Self> {
        validate_item_id(id)?;
        Ok(ItemId(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_item_id(&value)?;
        Ok(ItemId(value))
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

// =============================================================================
// Stock Item
// =============================================================================

/// A product held in the catalog.
///
/// Only the price is mutable, and only through
/// [`Catalog::update_price`](crate::Catalog::update_price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub(crate) id: ItemId,
    pub(crate) title: String,
    pub(crate) price: Money,
}

impl StockItem {
    pub(crate) fn new(id: ItemId, title: impl Into<String>, price: Money) -> Self {
        StockItem {
            id,
            title: title.into(),
            price,
        }
    }

    /// Unique identifier.
    #[inline]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Display title (e.g. `Milk`).
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One `(item, quantity)` pair inside a cart.
///
/// ## Invariants
/// - `quantity > 0` while the line exists
/// - `item_id` names an entry currently in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub(crate) item_id: ItemId,
    pub(crate) quantity: u32,
}

impl CartLine {
    pub(crate) fn new(item_id: ItemId, quantity: u32) -> Self {
        CartLine { item_id, quantity }
    }

    /// Identifier of the referenced catalog item.
    #[inline]
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Number of units in the cart.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total at the given unit price; `None` on overflow.
    #[inline]
    pub fn line_total(&self, unit_price: Money) -> Option<Money> {
        unit_price.checked_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
