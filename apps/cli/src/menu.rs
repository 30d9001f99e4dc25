//! Menu entries, numbered from 1 on screen.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DisplayLists,
    InsertItem,
    UpdatePrice,
    AddToCart,
    RemoveFromCart,
    DeductFromCart,
    RemoveItem,
    Checkout,
    Exit,
}

impl MenuOption {
    /// All entries in display order.
    pub const ALL: [MenuOption; 9] = [
        MenuOption::DisplayLists,
        MenuOption::InsertItem,
        MenuOption::UpdatePrice,
        MenuOption::AddToCart,
        MenuOption::RemoveFromCart,
        MenuOption::DeductFromCart,
        MenuOption::RemoveItem,
        MenuOption::Checkout,
        MenuOption::Exit,
    ];

    /// Maps the number the user typed (1-based) to an entry.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The 1-based number shown next to the entry.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::DisplayLists => "Display the current lists",
            MenuOption::InsertItem => "Insert a new stock item to the stock item list",
            MenuOption::UpdatePrice => "Update the price of the stock item",
            MenuOption::AddToCart => "Insert/Add a number of stock items to a shopping cart",
            MenuOption::RemoveFromCart => "Remove an item from the shopping cart",
            MenuOption::DeductFromCart => "Deduct a number of stock items from a shopping cart",
            MenuOption::RemoveItem => "Remove an item from the stock item list",
            MenuOption::Checkout => "Checkout and clear a shopping cart",
            MenuOption::Exit => "Exit the system",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number(), self.label())
    }
}
