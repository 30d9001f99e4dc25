//! # Cart Commands
//!
//! Menu entries 4, 5, 6 and 8.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  add_to_cart     ┌──────────┐  checkout   ┌──────────┐    │
//! │  │  Empty   │─────────────────►│ In Cart  │────────────►│  Paid    │    │
//! │  │  Cart    │                  │          │             │ (empty)  │    │
//! │  └──────────┘◄─────────────────└──────────┘             └──────────┘    │
//! │        deduct_from_cart / remove_from_cart                              │
//! │        (last line gone)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockcart_core::{Receipt, Shop};
use tracing::debug;

use crate::error::{CommandError, CommandResult};

pub fn add_to_cart(shop: &mut Shop, cart: usize, id: &str, quantity: u32) -> CommandResult<String> {
    debug!(cart, id = %id, quantity, "add_to_cart command");

    shop.add_to_cart(cart, id, quantity).map_err(|e| {
        CommandError::from(e).context(format!("Failed to insert/update {}", id))
    })?;

    Ok(format!("{} is successfully inserted/updated", id))
}

pub fn remove_from_cart(shop: &mut Shop, cart: usize, id: &str) -> CommandResult<String> {
    debug!(cart, id = %id, "remove_from_cart command");

    shop.remove_from_cart(cart, id)
        .map_err(|e| CommandError::from(e).context(format!("Failed to remove goods {}", id)))?;

    Ok(format!("{} is successfully removed", id))
}

pub fn deduct_from_cart(shop: &mut Shop, cart: usize, id: &str, quantity: u32) -> CommandResult<String> {
    debug!(cart, id = %id, quantity, "deduct_from_cart command");

    let remaining = shop.deduct_from_cart(cart, id, quantity).map_err(|e| {
        CommandError::from(e).context(format!("Failed to deduct quantity {}", id))
    })?;
    debug!(cart, id = %id, remaining, "quantity deducted");

    Ok(format!("Quantity of {} is successfully deducted", id))
}

/// Prices the cart and clears it.
pub fn checkout(shop: &mut Shop, cart: usize) -> CommandResult<Receipt> {
    debug!(cart, "checkout command");

    let receipt = shop
        .checkout(cart)
        .map_err(|e| CommandError::from(e).context(format!("Failed to checkout cart {}", cart)))?;
    debug!(cart, total_cents = receipt.total.cents(), lines = receipt.lines.len(), "cart checked out");

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockcart_core::{Money, MAX_PRICE_CENTS};

    fn shop() -> Shop {
        let mut shop = Shop::new(2).unwrap();
        shop.insert_item("item001", "Milk", Money::from_cents(250)).unwrap();
        shop
    }

    #[test]
    fn test_add_unknown_item() {
        let mut shop = shop();
        let err = add_to_cart(&mut shop, 0, "item404", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemUnavailable);
        assert_eq!(err.message, "Failed to insert/update item404");
    }

    #[test]
    fn test_deduct_and_remove() {
        let mut shop = shop();
        add_to_cart(&mut shop, 0, "item001", 3).unwrap();

        let err = deduct_from_cart(&mut shop, 0, "item001", 4).unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativeResult);

        assert_eq!(
            deduct_from_cart(&mut shop, 0, "item001", 1).unwrap(),
            "Quantity of item001 is successfully deducted"
        );
        assert_eq!(
            remove_from_cart(&mut shop, 0, "item001").unwrap(),
            "item001 is successfully removed"
        );
        assert_eq!(
            remove_from_cart(&mut shop, 0, "item001").unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_checkout() {
        let mut shop = shop();
        add_to_cart(&mut shop, 1, "item001", 3).unwrap();

        let receipt = checkout(&mut shop, 1).unwrap();
        assert_eq!(receipt.total.cents(), 750);
        assert!(shop.cart(1).unwrap().is_empty());

        assert_eq!(checkout(&mut shop, 7).unwrap_err().code, ErrorCode::InvalidCart);
    }

    #[test]
    fn test_checkout_overflow_keeps_cart() {
        let mut shop = Shop::new(1).unwrap();
        for id in ["item001", "item002"] {
            shop.insert_item(id, "Gold", Money::from_cents(MAX_PRICE_CENTS)).unwrap();
            add_to_cart(&mut shop, 0, id, u32::MAX).unwrap();
        }

        let err = checkout(&mut shop, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::Overflow);
        assert_eq!(err.message, "Failed to checkout cart 0");
        assert_eq!(shop.cart(0).unwrap().len(), 2);
    }
}
