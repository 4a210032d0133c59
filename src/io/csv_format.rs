//! CSV format handling for the comics and users files
//!
//! This module centralizes the row layout of both data files:
//! - `ID,Titulo,Autor,Estado` for the inventory
//! - `ID,Nombre,Email` for the user registry (Email empty when absent)
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Comic, ComicStatus, User};
use csv::StringRecord;
use serde::Serialize;

/// Header of the inventory file
pub const COMICS_HEADER: [&str; 4] = ["ID", "Titulo", "Autor", "Estado"];

/// Header of the user registry file
pub const USERS_HEADER: [&str; 3] = ["ID", "Nombre", "Email"];

/// One line of the inventory file
#[derive(Debug, Serialize, PartialEq)]
pub struct ComicRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub author: &'a str,
    pub status: ComicStatus,
}

/// One line of the user registry file
#[derive(Debug, Serialize, PartialEq)]
pub struct UserRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: Option<&'a str>,
}

/// Convert an inventory row to a Comic
///
/// Extra trailing fields are ignored.
///
/// # Returns
///
/// * `Ok(Comic)` - Successfully converted row
/// * `Err(String)` - Too few fields, an empty field, or an unknown status
pub fn comic_from_row(row: &StringRecord) -> Result<Comic, String> {
    if row.len() < COMICS_HEADER.len() {
        return Err(format!(
            "expected {} fields ({}), found {}",
            COMICS_HEADER.len(),
            COMICS_HEADER.join(","),
            row.len()
        ));
    }

    Comic::parse(&row[0], &row[1], &row[2], &row[3]).map_err(|e| e.to_string())
}

/// Convert a Comic to its inventory row
pub fn comic_to_row(comic: &Comic) -> ComicRow<'_> {
    ComicRow {
        id: comic.id(),
        title: comic.title(),
        author: comic.author(),
        status: comic.status(),
    }
}

/// Convert a user registry row to a User
///
/// The email column is optional; a missing or empty column means no email.
pub fn user_from_row(row: &StringRecord) -> Result<User, String> {
    if row.len() < 2 {
        return Err(format!(
            "expected at least 2 fields (ID,Nombre), found {}",
            row.len()
        ));
    }

    User::new(&row[0], &row[1], row.get(2)).map_err(|e| e.to_string())
}

/// Convert a User to its registry row
pub fn user_to_row(user: &User) -> UserRow<'_> {
    UserRow {
        id: user.id(),
        name: user.name(),
        email: user.email(),
    }
}
