//! Catalog commands: menu entries 1, 2, 3 and 7.

use stockcart_core::{Money, Shop, ShopSnapshot};
use tracing::debug;

use crate::error::{CommandError, CommandResult};

/// Returns the current catalog and carts.
pub fn display(shop: &Shop) -> ShopSnapshot {
    debug!("display command");
    shop.snapshot()
}

pub fn insert_item(shop: &mut Shop, id: &str, title: &str, price_cents: i64) -> CommandResult<String> {
    debug!(id = %id, title = %title, price_cents, "insert_item command");

    shop.insert_item(id, title, Money::from_cents(price_cents))
        .map_err(|e| CommandError::from(e).context(format!("Failed to insert {}", id)))?;

    Ok(format!("{} is successfully inserted", id))
}

pub fn update_price(shop: &mut Shop, id: &str, price_cents: i64) -> CommandResult<String> {
    debug!(id = %id, price_cents, "update_price command");

    shop.update_price(id, Money::from_cents(price_cents))
        .map_err(|e| {
            CommandError::from(e).context(format!("Failed to update the price of {}", id))
        })?;

    Ok(format!("{} price is updated", id))
}

/// Removes an item from the catalog and from every cart holding it.
pub fn remove_item(shop: &mut Shop, id: &str) -> CommandResult<String> {
    debug!(id = %id, "remove_item command");

    let removed = shop.remove_item(id).map_err(|e| {
        CommandError::from(e).context(format!("Failed to remove {} from the goods list", id))
    })?;
    debug!(id = %id, purged_lines = removed.purged_lines, "cart lines purged");

    Ok(format!("{} is removed from the goods list", id))
}
