//! Interactive console front-end
//!
//! A read-eval loop over a numbered menu. Each data-entry flow prompts for
//! its fields one line at a time and dispatches to the [`ComicShop`].
//!
//! The console is generic over its input and output so it can be driven by
//! stdin/stdout or by in-memory buffers. End of input ends the session the
//! same way as the exit option.

mod menu;

pub use menu::{parse_selection, render_menu, MenuOption};

use crate::core::ComicShop;
use crate::types::{Comic, ShopError, User};
use std::io::{BufRead, Write};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console session bound to a shop
pub struct Console<'a, R, W> {
    shop: &'a mut ComicShop,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(shop: &'a mut ComicShop, input: R, output: W) -> Self {
        Console {
            shop,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output are returned; every
    /// business error is printed and the loop continues.
    pub fn run(&mut self) -> Result<(), ShopError> {
        loop {
            render_menu(&mut self.output)?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            let flow = match parse_selection(&line) {
                Ok(Some(option)) => self.dispatch(option)?,
                Ok(None) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow, ShopError> {
        match option {
            MenuOption::ListComics => self.list_comics(),
            MenuOption::FindComic => self.find_comic(),
            MenuOption::SellComic => self.sell_comic(),
            MenuOption::MarkAvailable => self.mark_available(),
            MenuOption::AddComic => self.add_comic(),
            MenuOption::RemoveComic => self.remove_comic(),
            MenuOption::ListUsers => self.list_users(false),
            MenuOption::ListUsersByName => self.list_users(true),
            MenuOption::AddUser => self.add_user(),
            MenuOption::Exit => {
                writeln!(self.output, "Leaving the comic shop. See you soon!")?;
                Ok(Flow::Exit)
            }
        }
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, ShopError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShopError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn list_comics(&mut self) -> Result<Flow, ShopError> {
        let comics = self.shop.list_comics();
        if comics.is_empty() {
            writeln!(self.output, "The comic inventory is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Comics in Inventory ---")?;
        for comic in comics {
            writeln!(self.output, "{}", comic)?;
        }
        writeln!(self.output, "---------------------------")?;
        Ok(Flow::Continue)
    }

    fn find_comic(&mut self) -> Result<Flow, ShopError> {
        let Some(id) = self.prompt("Enter the ID of the comic to find: ")? else {
            return Ok(Flow::Exit);
        };

        match self.shop.find_comic(&id) {
            Some(comic) => writeln!(self.output, "Comic found: {}", comic)?,
            None => writeln!(self.output, "Comic with ID '{}' not found.", id.trim())?,
        }
        Ok(Flow::Continue)
    }

    fn sell_comic(&mut self) -> Result<Flow, ShopError> {
        let Some(comic_id) = self.prompt("Enter the ID of the comic to sell/reserve: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(user_id) = self.prompt("Enter the ID of the buying/reserving user: ")? else {
            return Ok(Flow::Exit);
        };

        let comic = match self.shop.sell(&comic_id, &user_id) {
            Ok(comic) => comic,
            Err(e) => {
                writeln!(self.output, "Could not record the sale/reservation: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let buyer = self
            .shop
            .find_user(&user_id)
            .map(|user| format!("{} (ID: {})", user.name(), user.id()))
            .unwrap_or_else(|| user_id.trim().to_string());
        writeln!(
            self.output,
            "Sale/reservation recorded: '{}' (ID: {}) to {}.",
            comic.title(),
            comic.id(),
            buyer
        )?;
        Ok(Flow::Continue)
    }

    fn mark_available(&mut self) -> Result<Flow, ShopError> {
        let Some(comic_id) = self.prompt("Enter the ID of the comic to mark as available: ")?
        else {
            return Ok(Flow::Exit);
        };

        match self.shop.mark_available(&comic_id) {
            Ok(changed) => {
                let verb = if changed { "is now" } else { "is already" };
                if let Some(comic) = self.shop.find_comic(&comic_id) {
                    writeln!(
                        self.output,
                        "Comic '{}' (ID: {}) {} available.",
                        comic.title(),
                        comic.id(),
                        verb
                    )?;
                }
            }
            Err(e) if e.is_not_found() => {
                writeln!(self.output, "Comic with ID '{}' not found.", comic_id.trim())?
            }
            Err(e) => writeln!(self.output, "Could not mark as available: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_comic(&mut self) -> Result<Flow, ShopError> {
        let Some(id) = self.prompt("Enter the ID of the new comic: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = self.prompt("Enter the comic title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter the comic author: ")? else {
            return Ok(Flow::Exit);
        };

        let comic = match Comic::available(&id, &title, &author) {
            Ok(comic) => comic,
            Err(e) => {
                writeln!(self.output, "Could not add comic: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let summary = format!("'{}' (ID: {})", comic.title(), comic.id());
        if self.shop.add_comic(comic) {
            writeln!(self.output, "Comic {} added to the inventory.", summary)?;
        } else {
            writeln!(
                self.output,
                "Could not add comic {}: the ID is already registered.",
                summary
            )?;
        }
        Ok(Flow::Continue)
    }

    fn remove_comic(&mut self) -> Result<Flow, ShopError> {
        let Some(id) = self.prompt("Enter the ID of the comic to remove: ")? else {
            return Ok(Flow::Exit);
        };

        if self.shop.remove_comic(&id) {
            writeln!(self.output, "Comic removed.")?;
        } else {
            writeln!(
                self.output,
                "Could not remove the comic: it does not exist or is sold/reserved."
            )?;
        }
        Ok(Flow::Continue)
    }

    fn list_users(&mut self, by_name: bool) -> Result<Flow, ShopError> {
        let (users, heading) = if by_name {
            (self.shop.list_users_by_name(), "--- Users (by name) ---")
        } else {
            (self.shop.list_users(), "--- Users (by ID) ---")
        };

        if users.is_empty() {
            writeln!(self.output, "No users are registered.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n{}", heading)?;
        for user in users {
            writeln!(self.output, "{}", user)?;
        }
        writeln!(self.output, "{}", "-".repeat(heading.len()))?;
        Ok(Flow::Continue)
    }

    fn add_user(&mut self) -> Result<Flow, ShopError> {
        let Some(id) = self.prompt("Enter the ID of the new user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompt("Enter the name of the new user: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) =
            self.prompt("Enter the email of the new user (optional, press Enter to skip): ")?
        else {
            return Ok(Flow::Exit);
        };

        let user = match User::new(&id, &name, Some(&email)) {
            Ok(user) => user,
            Err(e) => {
                writeln!(self.output, "Could not add user: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let summary = format!("'{}' (ID: {})", user.name(), user.id());
        let conflict = if self.shop.find_user(user.id()).is_some() {
            Some("ID")
        } else if user.email().is_some_and(|email| self.shop.email_in_use(email)) {
            Some("email")
        } else {
            None
        };
        if let Some(field) = conflict {
            writeln!(
                self.output,
                "Could not add user {}: the {} is already registered.",
                summary, field
            )?;
            return Ok(Flow::Continue);
        }

        if self.shop.add_user(user) {
            writeln!(self.output, "User {} added.", summary)?;
        } else {
            writeln!(self.output, "Could not add user {}.", summary)?;
        }
        Ok(Flow::Continue)
    }
}
