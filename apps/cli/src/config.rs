//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line arguments (`--carts`, `--json`)
//! 2. Environment variables (`STOCKCART_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use stockcart_core::validation::validate_cart_count;
use stockcart_core::Money;
use tracing::warn;

/// Digits after the decimal point; `Money` counts cents.
const CURRENCY_DECIMALS: u32 = 2;

/// How results are written to the terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines, as the menu has always printed them
    #[default]
    Text,

    /// Snapshots, receipts and failures as pretty JSON
    Json,
}

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Store name (printed in the banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of carts; `None` means ask at startup
    pub carts: Option<usize>,

    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            store_name: "Simplified Retail System".to_string(),
            currency_symbol: "$".to_string(),
            carts: None,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKCART_STORE_NAME`: Override the banner
    /// - `STOCKCART_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `STOCKCART_CARTS`: Number of carts (1..10); skips the startup prompt
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(store_name) = lookup("STOCKCART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("STOCKCART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(carts) = lookup("STOCKCART_CARTS") {
            match carts.trim().parse::<usize>() {
                Ok(count) if validate_cart_count(count).is_ok() => config.carts = Some(count),
                _ => warn!(value = %carts, "ignoring invalid STOCKCART_CARTS"),
            }
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use stockcart_cli::config::CliConfig;
    /// use stockcart_core::Money;
    ///
    /// let config = CliConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(250)), "$2.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(CURRENCY_DECIMALS);

        format!(
            "{}{}{}.{:0width$}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / divisor).unsigned_abs(),
            (cents % divisor).unsigned_abs(),
            width = CURRENCY_DECIMALS as usize
        )
    }
}
