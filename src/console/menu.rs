//! Main menu options and selection parsing

use crate::types::ShopError;
use std::io::{self, Write};

/// Entries of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    ListComics,
    FindComic,
    SellComic,
    MarkAvailable,
    AddComic,
    RemoveComic,
    ListUsers,
    ListUsersByName,
    AddUser,
}

impl MenuOption {
    /// Map a menu number (0-9) to its option
    pub fn from_number(number: u32) -> Option<Self> {
        let option = match number {
            0 => MenuOption::Exit,
            1 => MenuOption::ListComics,
            2 => MenuOption::FindComic,
            3 => MenuOption::SellComic,
            4 => MenuOption::MarkAvailable,
            5 => MenuOption::AddComic,
            6 => MenuOption::RemoveComic,
            7 => MenuOption::ListUsers,
            8 => MenuOption::ListUsersByName,
            9 => MenuOption::AddUser,
            _ => return None,
        };
        Some(option)
    }
}

/// Parse a menu selection
///
/// # Returns
///
/// * `Ok(Some(option))` - a valid menu number
/// * `Ok(None)` - a number with no menu entry
/// * `Err(ShopError::InvalidInput)` - the input is not a number
pub fn parse_selection(input: &str) -> Result<Option<MenuOption>, ShopError> {
    let number: u32 = input
        .trim()
        .parse()
        .map_err(|_| ShopError::invalid_input("please enter a number"))?;
    Ok(MenuOption::from_number(number))
}

/// Print the main menu followed by the selection prompt
pub fn render_menu(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "--- Comic Shop Menu ---")?;
    writeln!(output, "1. List comics in inventory")?;
    writeln!(output, "2. Find comic by ID")?;
    writeln!(output, "3. Record sale/reservation")?;
    writeln!(
        output,
        "4. Mark comic as available (cancel reservation/return)"
    )?;
    writeln!(output, "5. Add new comic to inventory")?;
    writeln!(output, "6. Remove comic from inventory")?;
    writeln!(output, "------------------------------------")?;
    writeln!(output, "7. List users (by ID)")?;
    writeln!(output, "8. List users (by name)")?;
    writeln!(output, "9. Add new user")?;
    writeln!(output, "0. Exit")?;
    write!(output, "Select an option: ")?;
    output.flush()
}
