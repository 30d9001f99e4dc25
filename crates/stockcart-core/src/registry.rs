//! # Cart Registry
//!
//! The fixed collection of all carts, sized once at startup.

use std::slice;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::validation::validate_cart_count;

/// Fixed-length collection of independent carts.
///
/// The length is chosen in [`CartRegistry::new`] and never changes; there
/// is no way to add or drop a cart afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRegistry {
    carts: Vec<Cart>,
}

impl CartRegistry {
    /// Creates `count` empty carts.
    ///
    /// ## Errors
    /// `Validation` if `count` is outside `1..=MAX_SHOPPING_CARTS`.
    pub fn new(count: usize) -> CoreResult<Self> {
        validate_cart_count(count)?;
        Ok(CartRegistry {
            carts: (0..count).map(|_| Cart::new()).collect(),
        })
    }

    /// Number of carts.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// False for any registry built by [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cart> {
        self.carts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cart> {
        self.carts.get_mut(index)
    }

    /// Iterates carts in index order.
    pub fn iter(&self) -> slice::Iter<'_, Cart> {
        self.carts.iter()
    }

    /// Iterates carts mutably in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Cart> {
        self.carts.iter_mut()
    }

    /// Clears every cart and returns the number of lines removed.
    pub fn clear_all(&mut self) -> usize {
        self.carts.iter_mut().map(Cart::clear).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::{Catalog, ItemId, Money, MAX_SHOPPING_CARTS};

    #[test]
    fn test_new_creates_empty_carts() {
        let registry = CartRegistry::new(3).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(registry.iter().all(Cart::is_empty));
    }

    #[test]
    fn test_new_rejects_bad_counts() {
        assert!(matches!(CartRegistry::new(0), Err(CoreError::Validation(_))));
        assert!(matches!(
            CartRegistry::new(MAX_SHOPPING_CARTS + 1),
            Err(CoreError::Validation(_))
        ));
        assert!(CartRegistry::new(MAX_SHOPPING_CARTS).is_ok());
    }

    #[test]
    fn test_carts_are_independent() {
        let mut catalog = Catalog::new();
        catalog
            .insert(ItemId::parse("item001").unwrap(), "Milk", Money::from_cents(250))
            .unwrap();

        let mut registry = CartRegistry::new(2).unwrap();
        registry.get_mut(1).unwrap().add_or_accumulate("item001", 4, &catalog).unwrap();

        assert!(registry.get(0).unwrap().is_empty());
        assert_eq!(registry.get(1).unwrap().len(), 1);
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn test_clear_all() {
        let mut catalog = Catalog::new();
        catalog
            .insert(ItemId::parse("item001").unwrap(), "Milk", Money::from_cents(250))
            .unwrap();

        let mut registry = CartRegistry::new(3).unwrap();
        for cart in registry.iter_mut() {
            cart.add_or_accumulate("item001", 1, &catalog).unwrap();
        }

        assert_eq!(registry.clear_all(), 3);
        assert!(registry.iter().all(Cart::is_empty));
    }
}
