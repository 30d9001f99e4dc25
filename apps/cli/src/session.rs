//! # Session
//!
//! The interactive menu loop.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start: ask for the cart count (unless configured) ──► Shop::new        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  print menu ──► read option ──► invalid? "Invalid option", repeat       │
//! │     │                                                                   │
//! │     ├── Exit or end of input ──► Shop::shutdown, return Teardown        │
//! │     │                                                                   │
//! │     └── otherwise: prompt arguments ──► one command ──► print outcome   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use serde::Serialize;
use stockcart_core::{Shop, Teardown};
use tracing::{info, warn};

use crate::commands::{cart, catalog};
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CommandResult, SessionError};
use crate::menu::MenuOption;
use crate::prompt::Prompter;
use crate::render;

pub struct Session<R, W> {
    shop: Shop,
    prompt: Prompter<R, W>,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Sets up the carts, asking for their number when the config does not
    /// carry one.
    pub fn start(config: CliConfig, input: R, output: W) -> Result<Self, SessionError> {
        let mut prompt = Prompter::new(input, output);

        prompt.say("=== Initialize the shopping carts ===")?;
        let cart_count = match config.carts {
            Some(count) => count,
            None => prompt.ask_cart_count()?,
        };
        let shop = Shop::new(cart_count)?;
        info!(cart_count, "shopping carts initialized");

        prompt.say(format!("=== {} ===", config.store_name))?;

        Ok(Session {
            shop,
            prompt,
            config,
        })
    }

    /// Runs the menu until the user exits or input ends, then tears the
    /// shop down.
    pub fn run(mut self) -> Result<Teardown, SessionError> {
        loop {
            let option = match self.next_option() {
                Ok(Some(option)) => option,
                Ok(None) => continue,
                Err(SessionError::EndOfInput) => {
                    info!("input closed, leaving the menu");
                    break;
                }
                Err(err) => return Err(err),
            };

            if option == MenuOption::Exit {
                break;
            }

            match self.dispatch(option) {
                Ok(()) => {}
                Err(SessionError::EndOfInput) => {
                    info!("input closed, leaving the menu");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let teardown = self.shop.shutdown();
        info!(
            items_removed = teardown.items_removed,
            lines_purged = teardown.lines_purged,
            "shop released"
        );
        Ok(teardown)
    }

    /// Prints the menu and reads a choice; `None` for an invalid one.
    fn next_option(&mut self) -> Result<Option<MenuOption>, SessionError> {
        self.prompt.say("=== Menu ===")?;
        for option in MenuOption::ALL {
            self.prompt.say(option)?;
        }

        let answer = self.prompt.ask("Enter your option: ")?;
        let option = answer.parse::<usize>().ok().and_then(MenuOption::from_choice);
        if option.is_none() {
            self.prompt.say("Invalid option")?;
        }
        Ok(option)
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<(), SessionError> {
        match option {
            MenuOption::DisplayLists => {
                let snapshot = catalog::display(&self.shop);
                match self.config.output {
                    OutputFormat::Text => {
                        let text = render::snapshot(&snapshot, &self.config);
                        self.prompt.say(text)?;
                    }
                    OutputFormat::Json => self.emit_json(&snapshot)?,
                }
            }
            MenuOption::InsertItem => {
                let id = self.prompt.ask_item_id()?;
                let title = self.prompt.ask_title()?;
                let price = self.prompt.ask_price_cents()?;
                let outcome = catalog::insert_item(&mut self.shop, &id, &title, price);
                self.report(outcome)?;
            }
            MenuOption::UpdatePrice => {
                let id = self.prompt.ask_item_id()?;
                let price = self.prompt.ask_price_cents()?;
                let outcome = catalog::update_price(&mut self.shop, &id, price);
                self.report(outcome)?;
            }
            MenuOption::AddToCart => {
                let index = self.prompt.ask_cart_index(self.shop.cart_count())?;
                let id = self.prompt.ask_item_id()?;
                let quantity = self.prompt.ask_quantity("Add a quantity: ")?;
                let outcome = cart::add_to_cart(&mut self.shop, index, &id, quantity);
                self.report(outcome)?;
            }
            MenuOption::RemoveFromCart => {
                let index = self.prompt.ask_cart_index(self.shop.cart_count())?;
                let id = self.prompt.ask_item_id()?;
                let outcome = cart::remove_from_cart(&mut self.shop, index, &id);
                self.report(outcome)?;
            }
            MenuOption::DeductFromCart => {
                let index = self.prompt.ask_cart_index(self.shop.cart_count())?;
                let id = self.prompt.ask_item_id()?;
                let quantity = self.prompt.ask_quantity("Deduct a quantity: ")?;
                let outcome = cart::deduct_from_cart(&mut self.shop, index, &id, quantity);
                self.report(outcome)?;
            }
            MenuOption::RemoveItem => {
                let id = self.prompt.ask_item_id()?;
                let outcome = catalog::remove_item(&mut self.shop, &id);
                self.report(outcome)?;
            }
            MenuOption::Checkout => {
                let index = self.prompt.ask_cart_index(self.shop.cart_count())?;
                match cart::checkout(&mut self.shop, index) {
                    Ok(receipt) => match self.config.output {
                        OutputFormat::Text => {
                            let text = render::receipt(&receipt, &self.config);
                            self.prompt.say(text)?;
                        }
                        OutputFormat::Json => self.emit_json(&receipt)?,
                    },
                    Err(err) => self.report::<String>(Err(err))?,
                }
            }
            MenuOption::Exit => {}
        }
        Ok(())
    }

    /// Prints a command outcome; failures are also logged.
    fn report<T: std::fmt::Display>(&mut self, outcome: CommandResult<T>) -> Result<(), SessionError> {
        match outcome {
            Ok(message) => self.prompt.say(message),
            Err(err) => {
                warn!(code = ?err.code, reason = ?err.reason, "{}", err.message);
                match self.config.output {
                    OutputFormat::Text => self.prompt.say(&err),
                    OutputFormat::Json => self.emit_json(&err),
                }
            }
        }
    }

    fn emit_json<T: Serialize>(&mut self, value: &T) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(value)?;
        self.prompt.say(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(config: CliConfig, input: &str) -> (Teardown, String) {
        let mut out = Vec::new();
        let teardown = Session::start(config, input.as_bytes(), &mut out)
            .unwrap()
            .run()
            .unwrap();
        (teardown, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_asks_for_cart_count() {
        let (_, out) = session_output(CliConfig::default(), "0\n11\n2\n9\n");
        assert_eq!(out.matches("Invalid number of shopping cart").count(), 2);
        assert!(out.contains("=== Simplified Retail System ==="));
    }

    #[test]
    fn test_configured_cart_count_skips_prompt() {
        let config = CliConfig {
            carts: Some(3),
            ..CliConfig::default()
        };
        let (_, out) = session_output(config, "9\n");
        assert!(!out.contains("Enter the number of shopping cart"));
    }

    #[test]
    fn test_invalid_option_repeats_menu() {
        let (_, out) = session_output(CliConfig::default(), "1\n0\nabc\n9\n");
        assert_eq!(out.matches("Invalid option").count(), 2);
        assert_eq!(out.matches("=== Menu ===").count(), 3);
    }

    #[test]
    fn test_end_of_input_tears_down() {
        let input = "1\n2\nitem001\nMilk\n250\n4\n0\nitem001\n3\n";
        let (teardown, out) = session_output(CliConfig::default(), input);
        assert!(out.contains("item001 is successfully inserted/updated"));
        assert_eq!(teardown.items_removed, 1);
        assert_eq!(teardown.lines_purged, 1);
    }
}
