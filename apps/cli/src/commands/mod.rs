//! # Commands Module
//!
//! One function per menu action. Each takes the shop plus already-prompted
//! arguments, performs exactly one core operation and returns either the
//! line to print or a [`CommandError`](crate::error::CommandError).
//!
//! ## Command Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Categories                                   │
//! │                                                                         │
//! │  catalog.rs                         cart.rs                             │
//! │  ──────────                         ───────                             │
//! │  • insert_item                      • add_to_cart                       │
//! │  • update_price                     • remove_from_cart                  │
//! │  • remove_item (cascading)          • deduct_from_cart                  │
//! │  • display                          • checkout                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands do not touch the terminal, which keeps them testable without a
//! session.

pub mod cart;
pub mod catalog;
