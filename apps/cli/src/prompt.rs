//! # Prompt
//!
//! Line-oriented input with re-prompting.
//!
//! Every `ask_*` method keeps asking until the answer passes the matching
//! rule from [`stockcart_core::validation`], so the core only ever sees
//! valid identifiers, positive quantities and in-range cart indices.
//! Reaching end of input surfaces as [`SessionError::EndOfInput`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use stockcart_core::validation::{
    validate_cart_count, validate_cart_index, validate_item_id, validate_price_cents,
    validate_quantity, validate_title, ValidationResult,
};
use stockcart_core::MAX_SHOPPING_CARTS;

use crate::error::SessionError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            line: String::new(),
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `prompt` and returns the next input line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(self.line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer, printing `retry` after each
    /// rejected one.
    pub fn ask_until<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> Result<T, SessionError>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.say(retry)?,
            }
        }
    }

    /// Asks until `validate` accepts the answer, printing the validation
    /// message after each rejected one.
    fn ask_validated<F>(&mut self, prompt: &str, validate: F) -> Result<String, SessionError>
    where
        F: Fn(&str) -> ValidationResult<()>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(err) => self.say(err)?,
            }
        }
    }

    pub fn ask_item_id(&mut self) -> Result<String, SessionError> {
        self.ask_validated("Enter a ID: ", validate_item_id)
    }

    pub fn ask_title(&mut self) -> Result<String, SessionError> {
        self.ask_validated("Enter a title: ", validate_title)
    }

    pub fn ask_price_cents(&mut self) -> Result<i64, SessionError> {
        self.ask_until("Enter a price in cents: ", "Enter a positive price in cents", |s| {
            s.parse::<i64>()
                .ok()
                .filter(|cents| validate_price_cents(*cents).is_ok())
        })
    }

    pub fn ask_quantity(&mut self, prompt: &str) -> Result<u32, SessionError> {
        self.ask_until(prompt, "Please enter a positive quantity", |s| {
            s.parse::<u32>()
                .ok()
                .filter(|qty| validate_quantity(*qty).is_ok())
        })
    }

    pub fn ask_cart_index(&mut self, count: usize) -> Result<usize, SessionError> {
        let prompt = format!(
            "Enter a shopping cart ID (valid: 0 to {}): ",
            count.saturating_sub(1)
        );
        self.ask_until(&prompt, "Please enter a valid shopping cart ID", |s| {
            s.parse::<usize>()
                .ok()
                .filter(|index| validate_cart_index(*index, count).is_ok())
        })
    }

    pub fn ask_cart_count(&mut self) -> Result<usize, SessionError> {
        let prompt = format!(
            "Enter the number of shopping cart (1..{}): ",
            MAX_SHOPPING_CARTS
        );
        self.ask_until(&prompt, "Invalid number of shopping cart", |s| {
            s.parse::<usize>()
                .ok()
                .filter(|count| validate_cart_count(*count).is_ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcart_core::MAX_PRICE_CENTS;

    fn run<T>(input: &str, f: impl FnOnce(&mut Prompter<&[u8], &mut Vec<u8>>) -> T) -> (T, String) {
        let mut out = Vec::new();
        let value = {
            let mut prompter = Prompter::new(input.as_bytes(), &mut out);
            f(&mut prompter)
        };
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quantity_reprompts_until_positive() {
        let (qty, out) = run("0\nabc\n4\n", |p| p.ask_quantity("Add a quantity: ").unwrap());
        assert_eq!(qty, 4);
        assert_eq!(out.matches("Please enter a positive quantity").count(), 2);
        assert_eq!(out.matches("Add a quantity: ").count(), 3);
    }

    #[test]
    fn test_cart_index_bounds() {
        let (index, out) = run("3\n2\n", |p| p.ask_cart_index(3).unwrap());
        assert_eq!(index, 2);
        assert!(out.contains("Enter a shopping cart ID (valid: 0 to 2): "));
        assert!(out.contains("Please enter a valid shopping cart ID"));
    }

    #[test]
    fn test_item_id_shows_validation_message() {
        let (id, out) = run("\nitem0000001\nitem001\n", |p| p.ask_item_id().unwrap());
        assert_eq!(id, "item001");
        assert!(out.contains("id is required"));
        assert!(out.contains("id must be at most 9 characters"));
    }

    #[test]
    fn test_price_above_cap_reprompts() {
        let too_high = (MAX_PRICE_CENTS + 1).to_string();
        let input = format!("{}\n{}\n", too_high, MAX_PRICE_CENTS);
        let (price, out) = run(&input, |p| p.ask_price_cents().unwrap());
        assert_eq!(price, MAX_PRICE_CENTS);
        assert_eq!(out.matches("Enter a positive price in cents").count(), 1);
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = run("", |p| p.ask_price_cents());
        assert!(matches!(result, Err(SessionError::EndOfInput)));
    }
}
