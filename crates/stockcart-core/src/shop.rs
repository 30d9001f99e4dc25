//! # Shop
//!
//! Owns the catalog and the cart registry and exposes one method per menu
//! action, so a caller never has to juggle the two containers itself.
//!
//! ## Menu Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu entry                           Shop method                       │
//! │  ──────────────────────────────────   ──────────────────────────────    │
//! │  1 Display the current lists          snapshot()                        │
//! │  2 Insert a new stock item            insert_item()                     │
//! │  3 Update the price                   update_price()                    │
//! │  4 Insert/Add to a shopping cart      add_to_cart()                     │
//! │  5 Remove from a shopping cart        remove_from_cart()                │
//! │  6 Deduct from a shopping cart        deduct_from_cart()                │
//! │  7 Remove from the stock item list    remove_item()   (cascading)       │
//! │  8 Checkout and clear a cart          checkout()                        │
//! │  9 Exit                               shutdown()                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{Catalog, RemovedItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::registry::CartRegistry;
use crate::types::{CartLine, ItemId, StockItem};
use crate::validation::{validate_price_cents, validate_title};

/// Catalog plus carts.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Catalog,
    carts: CartRegistry,
}

/// One line of a checkout receipt, priced at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub id: ItemId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// What a checkout charged before the cart was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub cart: usize,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub checked_out_at: DateTime<Utc>,
}

impl Receipt {
    /// True when nothing has to be paid.
    pub fn is_free(&self) -> bool {
        !self.total.is_positive()
    }
}

/// Read-only view of one cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub index: usize,
    pub lines: Vec<CartLine>,
    /// `None` when the total overflows.
    pub total: Option<Money>,
}

/// Read-only view of the whole shop (the "display current lists" action).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSnapshot {
    pub items: Vec<StockItem>,
    pub carts: Vec<CartSnapshot>,
}

/// Counts reported by [`Shop::shutdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teardown {
    pub items_removed: usize,
    pub lines_purged: usize,
}

impl Shop {
    /// Creates an empty catalog and `cart_count` empty carts.
    pub fn new(cart_count: usize) -> CoreResult<Self> {
        Ok(Shop {
            catalog: Catalog::new(),
            carts: CartRegistry::new(cart_count)?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn carts(&self) -> &CartRegistry {
        &self.carts
    }

    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }

    /// Returns the cart at `index`.
    pub fn cart(&self, index: usize) -> CoreResult<&Cart> {
        self.carts.get(index).ok_or(CoreError::CartOutOfRange {
            index,
            count: self.carts.len(),
        })
    }

    // =========================================================================
    // Catalog actions
    // =========================================================================

    /// Adds a new stock item.
    pub fn insert_item(&mut self, id: &str, title: &str, price: Money) -> CoreResult<()> {
        let id = ItemId::parse(id)?;
        validate_title(title)?;
        validate_price_cents(price.cents())?;
        self.catalog.insert(id, title.trim(), price)
    }

    /// Changes the price of an existing item. Carts see the new price on
    /// their next total.
    pub fn update_price(&mut self, id: &str, price: Money) -> CoreResult<()> {
        validate_price_cents(price.cents())?;
        self.catalog.update_price(id, price)
    }

    /// Removes an item from the catalog and from every cart.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<RemovedItem> {
        self.catalog.remove(id, &mut self.carts)
    }

    // =========================================================================
    // Cart actions
    // =========================================================================

    pub fn add_to_cart(&mut self, cart: usize, id: &str, quantity: u32) -> CoreResult<()> {
        slot_mut(&mut self.carts, cart)?.add_or_accumulate(id, quantity, &self.catalog)
    }

    pub fn remove_from_cart(&mut self, cart: usize, id: &str) -> CoreResult<CartLine> {
        slot_mut(&mut self.carts, cart)?.remove_line(id)
    }

    /// Returns the quantity left on the line (zero when it was removed).
    pub fn deduct_from_cart(&mut self, cart: usize, id: &str, quantity: u32) -> CoreResult<u32> {
        slot_mut(&mut self.carts, cart)?.deduct(id, quantity)
    }

    pub fn cart_total(&self, cart: usize) -> CoreResult<Money> {
        self.cart(cart)?.total(&self.catalog)
    }

    /// Prices the cart at current catalog prices, then clears it.
    ///
    /// A total that overflows fails with `TotalOverflow` and leaves the cart
    /// as it was.
    pub fn checkout(&mut self, cart: usize) -> CoreResult<Receipt> {
        let slot = slot_mut(&mut self.carts, cart)?;

        let total = slot.total(&self.catalog)?;
        let lines = slot
            .lines()
            .filter_map(|line| {
                self.catalog
                    .find(line.item_id().as_str())
                    .map(|item| (line, item))
            })
            .map(|(line, item)| {
                let line_total = line
                    .line_total(item.price())
                    .ok_or(CoreError::TotalOverflow)?;
                Ok(ReceiptLine {
                    id: item.id().clone(),
                    title: item.title().to_string(),
                    quantity: line.quantity(),
                    unit_price: item.price(),
                    line_total,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        slot.clear();

        Ok(Receipt {
            cart,
            lines,
            total,
            checked_out_at: Utc::now(),
        })
    }

    // =========================================================================
    // Whole-shop views
    // =========================================================================

    pub fn snapshot(&self) -> ShopSnapshot {
        ShopSnapshot {
            items: self.catalog.iter().cloned().collect(),
            carts: self
                .carts
                .iter()
                .enumerate()
                .map(|(index, cart)| CartSnapshot {
                    index,
                    lines: cart.lines().cloned().collect(),
                    total: cart.total(&self.catalog).ok(),
                })
                .collect(),
        }
    }

    /// Releases everything: each catalog entry is removed through the
    /// cascading delete, smallest identifier first, then the carts are
    /// cleared.
    pub fn shutdown(mut self) -> Teardown {
        let mut teardown = Teardown::default();

        while let Some(removed) = self.catalog.remove_first(&mut self.carts) {
            teardown.items_removed += 1;
            teardown.lines_purged += removed.purged_lines;
        }

        teardown.lines_purged += self.carts.clear_all();
        teardown
    }
}

fn slot_mut(carts: &mut CartRegistry, index: usize) -> CoreResult<&mut Cart> {
    let count = carts.len();
    carts
        .get_mut(index)
        .ok_or(CoreError::CartOutOfRange { index, count })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    fn stocked(carts: usize) -> Shop {
        let mut shop = Shop::new(carts).unwrap();
        shop.insert_item("item001", "Milk", Money::from_cents(250)).unwrap();
        shop.insert_item("item002", "Bread", Money::from_cents(300)).unwrap();
        shop
    }

    #[test]
    fn test_milk_walkthrough() {
        let mut shop = Shop::new(1).unwrap();
        shop.insert_item("item001", "Milk", Money::from_cents(250)).unwrap();

        shop.add_to_cart(0, "item001", 3).unwrap();
        assert_eq!(shop.cart_total(0).unwrap().cents(), 750);

        assert_eq!(shop.deduct_from_cart(0, "item001", 3).unwrap(), 0);
        assert!(shop.cart(0).unwrap().line("item001").is_none());
        assert_eq!(shop.cart_total(0).unwrap().cents(), 0);
    }

    #[test]
    fn test_catalog_order_ignores_insertion_order() {
        let mut shop = Shop::new(1).unwrap();
        shop.insert_item("item002", "Bread", Money::from_cents(300)).unwrap();
        shop.insert_item("item001", "Milk", Money::from_cents(250)).unwrap();

        let ids: Vec<&str> = shop.catalog().ids().map(ItemId::as_str).collect();
        assert_eq!(ids, vec!["item001", "item002"]);
    }

    #[test]
    fn test_insert_validates_input() {
        let mut shop = Shop::new(1).unwrap();
        assert!(matches!(
            shop.insert_item("", "Milk", Money::from_cents(250)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            shop.insert_item("item001", "  ", Money::from_cents(250)),
            Err(CoreError::Validation(_))
        ));
        assert!(shop.catalog().is_empty());
    }

    #[test]
    fn test_cart_index_out_of_range() {
        let mut shop = stocked(2);
        assert_eq!(
            shop.add_to_cart(2, "item001", 1),
            Err(CoreError::CartOutOfRange { index: 2, count: 2 })
        );
        assert!(shop.cart_total(5).is_err());
    }

    #[test]
    fn test_remove_item_cascades() {
        let mut shop = stocked(3);
        shop.add_to_cart(0, "item001", 1).unwrap();
        shop.add_to_cart(1, "item002", 1).unwrap();
        shop.add_to_cart(2, "item001", 5).unwrap();

        let removed = shop.remove_item("item001").unwrap();
        assert_eq!(removed.purged_lines, 2);
        assert!(shop.cart(0).unwrap().is_empty());
        assert!(shop.cart(2).unwrap().is_empty());
        assert_eq!(shop.cart(1).unwrap().len(), 1);

        assert!(matches!(shop.add_to_cart(0, "item001", 1), Err(CoreError::ItemUnavailable { .. })));
    }

    #[test]
    fn test_checkout_prices_then_clears() {
        let mut shop = stocked(2);
        shop.add_to_cart(1, "item002", 2).unwrap();
        shop.add_to_cart(1, "item001", 1).unwrap();
        shop.update_price("item002", Money::from_cents(350)).unwrap();

        let receipt = shop.checkout(1).unwrap();
        assert_eq!(receipt.cart, 1);
        assert_eq!(receipt.total.cents(), 250 + 2 * 350);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].id.as_str(), "item001");
        assert_eq!(receipt.lines[1].line_total.cents(), 700);
        assert!(!receipt.is_free());

        assert!(shop.cart(1).unwrap().is_empty());
        assert!(shop.checkout(1).unwrap().is_free());
    }

    #[test]
    fn test_insert_rejects_price_above_cap() {
        let mut shop = Shop::new(1).unwrap();
        assert!(matches!(
            shop.insert_item("item001", "Gold", Money::from_cents(i64::MAX / 2)),
            Err(CoreError::Validation(_))
        ));
        assert!(shop.catalog().is_empty());

        shop.insert_item("item001", "Gold", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        assert!(matches!(
            shop.update_price("item001", Money::from_cents(MAX_PRICE_CENTS + 1)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            shop.update_price("item001", Money::zero()),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(shop.catalog().find("item001").unwrap().price().cents(), MAX_PRICE_CENTS);
    }

    #[test]
    fn test_total_overflow_at_max_prices() {
        let mut shop = Shop::new(1).unwrap();
        shop.insert_item("item001", "Gold", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        shop.insert_item("item002", "Silver", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
        shop.add_to_cart(0, "item001", u32::MAX).unwrap();
        assert!(shop.cart_total(0).is_ok());

        shop.add_to_cart(0, "item002", u32::MAX).unwrap();
        assert_eq!(shop.cart_total(0), Err(CoreError::TotalOverflow));
        assert_eq!(shop.snapshot().carts[0].total, None);

        let before = shop.carts().clone();
        assert_eq!(shop.checkout(0), Err(CoreError::TotalOverflow));
        assert_eq!(shop.carts(), &before);

        shop.deduct_from_cart(0, "item002", u32::MAX).unwrap();
        let receipt = shop.checkout(0).unwrap();
        assert!(!receipt.is_free());
        assert!(shop.cart(0).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut shop = stocked(2);
        shop.add_to_cart(0, "item002", 2).unwrap();

        let snapshot = shop.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.carts.len(), 2);
        assert_eq!(snapshot.carts[0].total, Some(Money::from_cents(600)));
        assert!(snapshot.carts[1].lines.is_empty());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["items"][0]["id"], "item001");
        assert_eq!(json["carts"][0]["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_shutdown_purges_before_release() {
        let mut shop = stocked(2);
        shop.add_to_cart(0, "item001", 1).unwrap();
        shop.add_to_cart(0, "item002", 1).unwrap();
        shop.add_to_cart(1, "item002", 3).unwrap();

        let teardown = shop.shutdown();
        assert_eq!(
            teardown,
            Teardown {
                items_removed: 2,
                lines_purged: 3,
            }
        );
    }
}
