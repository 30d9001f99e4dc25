//! # Catalog
//!
//! The master ordered set of stock items.
//!
//! ## Ordering and Uniqueness
//! Items live in a `BTreeMap` keyed by [`ItemId`], so iteration is always
//! ascending by identifier and a second insert under the same key is
//! detected before anything is allocated.
//!
//! ## Cascading Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  remove("item001", registry)                                            │
//! │                                                                         │
//! │  1. item001 in catalog? ── no ──► Err(NotFound), nothing touched        │
//! │          │ yes                                                          │
//! │          ▼                                                              │
//! │  2. for cart in registry (index order, each once):                      │
//! │         drop the item001 line if the cart has one                       │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. unlink item001 from the catalog and hand it back                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::registry::CartRegistry;
use crate::types::{ItemId, StockItem};

/// Ordered, unique-by-identifier collection of stock items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<ItemId, StockItem>,
}

/// Result of a successful [`Catalog::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedItem {
    /// The entry that was unlinked from the catalog.
    pub item: StockItem,
    /// Number of carts that held a line for the item.
    pub purged_lines: usize,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Looks up an item by identifier.
    pub fn find(&self, id: &str) -> Option<&StockItem> {
        self.items.get(id)
    }

    /// Returns true when an item with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Inserts a new item in sorted position.
    ///
    /// ## Errors
    /// `DuplicateKey` if the identifier is already present; the existing
    /// entry is left untouched.
    pub fn insert(&mut self, id: ItemId, title: impl Into<String>, price: Money) -> CoreResult<()> {
        match self.items.entry(id) {
            Entry::Occupied(entry) => Err(CoreError::DuplicateKey {
                id: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                let item = StockItem::new(entry.key().clone(), title, price);
                entry.insert(item);
                Ok(())
            }
        }
    }

    /// Overwrites the price of an existing item.
    ///
    /// Price values are taken as given; the menu only ever passes positive
    /// amounts.
    pub fn update_price(&mut self, id: &str, price: Money) -> CoreResult<()> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found(id))?;
        item.price = price;
        Ok(())
    }

    /// Removes an item, first purging it from every cart in `registry`.
    ///
    /// ## Errors
    /// `NotFound` if the identifier is absent; no cart is touched.
    pub fn remove(&mut self, id: &str, registry: &mut CartRegistry) -> CoreResult<RemovedItem> {
        self.unlink(id, registry)
            .ok_or_else(|| CoreError::not_found(id))
    }

    /// Removes the smallest entry through the same cascading delete as
    /// [`remove`](Self::remove); `None` once the catalog is empty.
    pub fn remove_first(&mut self, registry: &mut CartRegistry) -> Option<RemovedItem> {
        let id = self.items.keys().next()?.clone();
        self.unlink(id.as_str(), registry)
    }

    fn unlink(&mut self, id: &str, registry: &mut CartRegistry) -> Option<RemovedItem> {
        if !self.items.contains_key(id) {
            return None;
        }

        // Carts go first so no line ever names a missing item.
        let purged_lines = registry
            .iter_mut()
            .filter_map(|cart| cart.purge(id))
            .count();

        let item = self.items.remove(id)?;
        Some(RemovedItem { item, purged_lines })
    }

    /// Iterates entries in ascending identifier order.
    pub fn iter(&self) -> btree_map::Values<'_, ItemId, StockItem> {
        self.items.values()
    }

    /// Iterates identifiers in ascending order.
    pub fn ids(&self) -> btree_map::Keys<'_, ItemId, StockItem> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StockItem;
    type IntoIter = btree_map::Values<'a, ItemId, StockItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::parse(s).unwrap()
    }

    fn ids(catalog: &Catalog) -> Vec<&str> {
        catalog.ids().map(ItemId::as_str).collect()
    }

    #[test]
    fn test_insert_keeps_sorted_order() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item002"), "Bread", Money::from_cents(300)).unwrap();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();
        catalog.insert(id("item003"), "Eggs", Money::from_cents(420)).unwrap();

        assert_eq!(ids(&catalog), vec!["item001", "item002", "item003"]);
    }

    #[test]
    fn test_insert_duplicate_is_rejected_without_change() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();
        let before = catalog.clone();

        let err = catalog
            .insert(id("item001"), "Other", Money::from_cents(999))
            .unwrap_err();

        assert_eq!(err, CoreError::DuplicateKey { id: "item001".into() });
        assert_eq!(catalog, before);
        assert_eq!(catalog.find("item001").unwrap().title(), "Milk");
    }

    #[test]
    fn test_update_price() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();

        catalog.update_price("item001", Money::from_cents(275)).unwrap();
        assert_eq!(catalog.find("item001").unwrap().price().cents(), 275);

        let before = catalog.clone();
        assert!(matches!(
            catalog.update_price("item999", Money::from_cents(1)),
            Err(CoreError::NotFound { .. })
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_find_missing() {
        let catalog = Catalog::new();
        assert!(catalog.find("item001").is_none());
        assert!(!catalog.contains("item001"));
    }

    #[test]
    fn test_remove_purges_carts_first() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();
        catalog.insert(id("item002"), "Bread", Money::from_cents(300)).unwrap();

        let mut registry = CartRegistry::new(3).unwrap();
        registry.get_mut(0).unwrap().add_or_accumulate("item001", 2, &catalog).unwrap();
        registry.get_mut(2).unwrap().add_or_accumulate("item001", 1, &catalog).unwrap();
        registry.get_mut(2).unwrap().add_or_accumulate("item002", 4, &catalog).unwrap();

        let removed = catalog.remove("item001", &mut registry).unwrap();

        assert_eq!(removed.item.id().as_str(), "item001");
        assert_eq!(removed.purged_lines, 2);
        assert!(!catalog.contains("item001"));
        assert!(registry.iter().all(|cart| cart.line("item001").is_none()));
        assert_eq!(registry.get(2).unwrap().line("item002").unwrap().quantity(), 4);
    }

    #[test]
    fn test_remove_first_drains_in_order() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item002"), "Bread", Money::from_cents(300)).unwrap();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();
        let mut registry = CartRegistry::new(1).unwrap();
        registry.get_mut(0).unwrap().add_or_accumulate("item002", 1, &catalog).unwrap();

        let first = catalog.remove_first(&mut registry).unwrap();
        assert_eq!(first.item.id().as_str(), "item001");
        assert_eq!(first.purged_lines, 0);

        let second = catalog.remove_first(&mut registry).unwrap();
        assert_eq!(second.item.id().as_str(), "item002");
        assert_eq!(second.purged_lines, 1);
        assert!(registry.get(0).unwrap().is_empty());

        assert!(catalog.remove_first(&mut registry).is_none());
    }

    #[test]
    fn test_remove_missing_changes_nothing() {
        let mut catalog = Catalog::new();
        catalog.insert(id("item001"), "Milk", Money::from_cents(250)).unwrap();
        let mut registry = CartRegistry::new(1).unwrap();
        registry.get_mut(0).unwrap().add_or_accumulate("item001", 2, &catalog).unwrap();

        let catalog_before = catalog.clone();
        let registry_before = registry.clone();

        assert!(matches!(
            catalog.remove("item002", &mut registry),
            Err(CoreError::NotFound { .. })
        ));
        assert_eq!(catalog, catalog_before);
        assert_eq!(registry, registry_before);
    }
}
