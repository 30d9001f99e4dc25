//! # Cart
//!
//! One shopper's ordered set of quantity lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action             Operation               Line Change            │
//! │  ───────────             ─────────               ───────────            │
//! │                                                                         │
//! │  Insert/Add ───────────► add_or_accumulate() ──► new line or qty += n   │
//! │                                                                         │
//! │  Deduct ───────────────► deduct() ─────────────► qty -= n, 0 drops it   │
//! │                                                                         │
//! │  Remove ───────────────► remove_line() ────────► line dropped           │
//! │                                                                         │
//! │  Checkout ─────────────► total() then clear() ─► all lines dropped      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by item and iterate in ascending identifier order
//! - Every line has `quantity > 0`
//! - Totals always use the catalog's current price (no price snapshot)

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, ItemId};
use crate::validation::validate_quantity;

/// A shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<ItemId, CartLine>,

    /// When the cart was created/last cleared
    opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: BTreeMap::new(),
            opened_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of catalog item `id`.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity is accumulated
    /// - Item not in cart: a new line is created in sorted position
    ///
    /// ## Errors
    /// - `ItemUnavailable` if the catalog has no entry for `id`
    /// - `QuantityOverflow` if accumulation would overflow
    /// - `Validation` if `quantity` is zero
    pub fn add_or_accumulate(&mut self, id: &str, quantity: u32, catalog: &Catalog) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let item = catalog.find(id).ok_or_else(|| CoreError::ItemUnavailable {
            id: id.to_string(),
        })?;

        match self.lines.entry(item.id().clone()) {
            btree_map::Entry::Occupied(mut entry) => {
                let line = entry.get_mut();
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CoreError::QuantityOverflow { id: id.to_string() })?;
            }
            btree_map::Entry::Vacant(entry) => {
                let line = CartLine::new(entry.key().clone(), quantity);
                entry.insert(line);
            }
        }

        Ok(())
    }

    /// Deducts `quantity` units of `id` and returns the quantity left.
    ///
    /// A result of zero means the line was removed.
    ///
    /// ## Errors
    /// - `NotFound` if the cart has no line for `id`
    /// - `NegativeResult` if `quantity` exceeds the line; nothing changes
    pub fn deduct(&mut self, id: &str, quantity: u32) -> CoreResult<u32> {
        let line = self
            .lines
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found(id))?;

        if quantity > line.quantity {
            return Err(CoreError::NegativeResult {
                id: id.to_string(),
                current: line.quantity,
                requested: quantity,
            });
        }

        let remaining = line.quantity - quantity;
        if remaining == 0 {
            self.lines.remove(id);
        } else {
            line.quantity = remaining;
        }

        Ok(remaining)
    }

    /// Removes the line for `id` regardless of its quantity.
    pub fn remove_line(&mut self, id: &str) -> CoreResult<CartLine> {
        self.lines.remove(id).ok_or_else(|| CoreError::not_found(id))
    }

    /// Drops the line for `id` if there is one. Used by the catalog's
    /// cascading delete.
    pub(crate) fn purge(&mut self, id: &str) -> Option<CartLine> {
        self.lines.remove(id)
    }

    /// Sums `quantity × price` over all lines at current catalog prices.
    ///
    /// ## Errors
    /// `TotalOverflow` if a line total or the sum does not fit.
    pub fn total(&self, catalog: &Catalog) -> CoreResult<Money> {
        self.lines
            .values()
            .filter_map(|line| {
                catalog
                    .find(line.item_id.as_str())
                    .map(|item| line.line_total(item.price()))
            })
            .try_fold(Money::zero(), |total, line_total| {
                line_total.and_then(|amount| total.checked_add(amount))
            })
            .ok_or(CoreError::TotalOverflow)
    }

    /// Removes every line, smallest identifier first, and returns how many
    /// were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.lines.pop_first().is_some() {
            removed += 1;
        }
        self.opened_at = Utc::now();
        removed
    }

    /// Returns the line for `id`, if any.
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Iterates lines in ascending identifier order.
    pub fn lines(&self) -> btree_map::Values<'_, ItemId, CartLine> {
        self.lines.values()
    }

    /// Number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
