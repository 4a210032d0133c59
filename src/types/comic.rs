//! Comic-related types for the comic shop
//!
//! This module defines the Comic entity and its availability status.

use super::error::ShopError;
use super::id::same_key;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Availability of a comic in the shop
///
/// Serialized with the shop's file tokens (`disponible`, `vendido`,
/// `reservado`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComicStatus {
    /// On the shelf and ready to be sold
    #[serde(rename = "disponible")]
    Available,

    /// Sold to a registered user
    #[serde(rename = "vendido")]
    Sold,

    /// Held for a registered user
    #[serde(rename = "reservado")]
    Reserved,
}

impl ComicStatus {
    /// File token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            ComicStatus::Available => "disponible",
            ComicStatus::Sold => "vendido",
            ComicStatus::Reserved => "reservado",
        }
    }

    /// Whether the comic can be sold or removed
    pub fn is_available(&self) -> bool {
        matches!(self, ComicStatus::Available)
    }
}

impl fmt::Display for ComicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComicStatus {
    type Err = ShopError;

    /// Parse a status token, case-insensitively
    ///
    /// Accepts both the file tokens and their English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disponible" | "available" => Ok(ComicStatus::Available),
            "vendido" | "sold" => Ok(ComicStatus::Sold),
            "reservado" | "reserved" => Ok(ComicStatus::Reserved),
            _ => Err(ShopError::invalid_status(s.trim())),
        }
    }
}

/// A comic, graphic novel or other collectible in the inventory
///
/// All text fields are trimmed on construction and guaranteed non-empty.
/// The status only changes through the inventory's sale and return
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    id: String,
    title: String,
    author: String,
    status: ComicStatus,
}

impl Comic {
    /// Create a comic, trimming every field
    ///
    /// # Errors
    ///
    /// Returns `ShopError::MissingField` naming the first of title, author or
    /// id that is empty after trimming.
    pub fn new(
        id: &str,
        title: &str,
        author: &str,
        status: ComicStatus,
    ) -> Result<Self, ShopError> {
        let title = required(title, "title")?;
        let author = required(author, "author")?;
        let id = required(id, "ID")?;

        Ok(Comic {
            id,
            title,
            author,
            status,
        })
    }

    /// Create a comic that is on the shelf
    pub fn available(id: &str, title: &str, author: &str) -> Result<Self, ShopError> {
        Self::new(id, title, author, ComicStatus::Available)
    }

    /// Create a comic from raw text fields, parsing the status token
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for an empty field (the status included) or
    /// `InvalidStatus` for an unknown status token.
    pub fn parse(id: &str, title: &str, author: &str, status: &str) -> Result<Self, ShopError> {
        if status.trim().is_empty() {
            return Err(ShopError::missing_field("Comic", "status"));
        }
        let status = status.parse()?;
        Self::new(id, title, author, status)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn status(&self) -> ComicStatus {
        self.status
    }

    /// Case-insensitive id match
    pub fn has_id(&self, id: &str) -> bool {
        same_key(&self.id, id)
    }

    pub(crate) fn set_status(&mut self, status: ComicStatus) {
        self.status = status;
    }
}

impl fmt::Display for Comic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nID: {}\nTÍTULO: {}\nAUTOR: {}\nESTADO: {}\n",
            self.id, self.title, self.author, self.status
        )
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ShopError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShopError::missing_field("Comic", field));
    }
    Ok(trimmed.to_string())
}
