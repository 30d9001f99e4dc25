//! # stockcart-core: Catalog and Cart Logic
//!
//! This crate holds the ordered containers behind the stockcart checkout
//! workflow. It has zero I/O dependencies; the terminal shell lives in
//! `apps/cli` and calls into this crate with already-validated input.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockcart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (menu shell)                        │   │
//! │  │    prompt ──► validate ──► one Shop call ──► render outcome     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │ registry  │  │   shop    │  │   │
//! │  │   │ StockItem │  │ CartLine  │  │ Vec<Cart> │  │ aggregate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SUBSCRIBER • NO GLOBAL STATE              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `ItemId`, `StockItem`, `CartLine`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - ordered, unique set of stock items
//! - [`cart`] - one shopper's ordered set of lines
//! - [`registry`] - fixed collection of carts
//! - [`shop`] - catalog + registry with one method per menu action
//! - [`error`] - domain error types
//! - [`validation`] - input rules shared with the shell
//!
//! ## Ownership
//!
//! The [`Catalog`] owns every [`StockItem`]. A [`CartLine`] stores only the
//! item's [`ItemId`], so removing an item from the catalog can never leave a
//! dangling reference; [`Catalog::remove`] still purges every cart before the
//! entry is dropped.
//!
//! ## Example Usage
//!
//! ```rust
//! use stockcart_core::{Money, Shop};
//!
//! let mut shop = Shop::new(2).unwrap();
//! shop.insert_item("item001", "Milk", Money::from_cents(250)).unwrap();
//! shop.add_to_cart(0, "item001", 3).unwrap();
//! assert_eq!(shop.cart_total(0).unwrap().cents(), 750);
//!
//! shop.deduct_from_cart(0, "item001", 3).unwrap();
//! assert_eq!(shop.cart_total(0).unwrap(), Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod registry;
pub mod shop;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{Catalog, RemovedItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use registry::CartRegistry;
pub use shop::{CartSnapshot, Receipt, ReceiptLine, Shop, ShopSnapshot, Teardown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of shopping carts a registry may hold.
pub const MAX_SHOPPING_CARTS: usize = 10;

/// Maximum length of an item identifier, in characters.
///
/// Identifiers such as `item001` are short business keys; the limit keeps
/// them printable in a single column of the list display.
pub const MAX_ID_LEN: usize = 9;

/// Maximum length of an item title, in characters.
pub const MAX_TITLE_LEN: usize = 99;

/// Highest accepted price, in cents.
///
/// Any price up to this bound times any `u32` quantity fits in an `i64`
/// line total.
pub const MAX_PRICE_CENTS: i64 = i64::MAX / u32::MAX as i64;
