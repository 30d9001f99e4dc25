//! Text rendering of snapshots and receipts.

use stockcart_core::{Receipt, ShopSnapshot};

use crate::config::CliConfig;

/// Renders the three list sections: items with prices, item titles, carts.
pub fn snapshot(snapshot: &ShopSnapshot, config: &CliConfig) -> String {
    let mut out = String::new();

    out.push_str("=== StockItem List (id[price]) ===\n");
    if snapshot.items.is_empty() {
        out.push_str("No items in the StockItem list");
    } else {
        let entries: Vec<String> = snapshot
            .items
            .iter()
            .map(|item| format!("{}[{}]", item.id(), config.format_currency(item.price())))
            .collect();
        out.push_str(&entries.join(" -> "));
    }
    out.push('\n');

    out.push_str("=== StockItem titles ===\n");
    if snapshot.items.is_empty() {
        out.push_str("No StockItem titles\n");
    }
    for item in &snapshot.items {
        out.push_str(&format!("{}: {}\n", item.id(), item.title()));
    }

    out.push_str("=== Shopping carts ===\n");
    for cart in &snapshot.carts {
        if cart.lines.is_empty() {
            out.push_str(&format!("Cart {}: No items in the shopping cart\n", cart.index));
            continue;
        }
        let lines: Vec<String> = cart
            .lines
            .iter()
            .map(|line| format!("{}: {}", line.item_id(), line.quantity()))
            .collect();
        out.push_str(&format!("Cart {}: {}\n", cart.index, lines.join(", ")));
    }

    // Drop the final newline; the caller prints line by line.
    out.pop();
    out
}

/// Renders the payment request and the cleared-cart notice.
pub fn receipt(receipt: &Receipt, config: &CliConfig) -> String {
    let payment = if receipt.is_free() {
        "You don't need to pay!".to_string()
    } else {
        format!("Please pay for {}", config.format_currency(receipt.total))
    };
    format!(
        "{}\nThe shopping cart {} is cleared",
        payment, receipt.cart
    )
}
