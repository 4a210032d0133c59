//! Comic inventory module
//!
//! This module provides the `ComicInventory` struct which holds every comic in
//! the shop, in insertion order, together with the set of registered ids.
//!
//! The ComicInventory is responsible for:
//! - Rejecting duplicate ids (case-insensitive)
//! - Case-insensitive lookup by id
//! - Guarding removal and sale against comics that are not on the shelf
//! - Applying status changes

use crate::types::{fold_key, Comic, ComicStatus, KeyKind, ShopError};
use std::collections::HashSet;
use tracing::warn;

/// In-memory comic inventory
///
/// Comics are kept in a Vec so listings preserve insertion order; the folded
/// ids are mirrored in a HashSet for constant-time duplicate checks.
#[derive(Debug, Default)]
pub struct ComicInventory {
    /// Comics in insertion order
    comics: Vec<Comic>,

    /// Folded ids of every comic in `comics`
    ids: HashSet<String>,
}

impl ComicInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        ComicInventory {
            comics: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Build an inventory from loaded comics
    ///
    /// Later comics whose id repeats an earlier one are skipped with a warning.
    pub fn from_comics(comics: impl IntoIterator<Item = Comic>) -> Self {
        let mut inventory = Self::new();
        for comic in comics {
            if let Err(e) = inventory.insert(comic) {
                warn!("Ignoring repeated inventory row: {}", e);
            }
        }
        inventory
    }

    /// Append a comic
    ///
    /// # Errors
    ///
    /// Returns `ShopError::DuplicateKey` if a comic with the same id (ignoring
    /// case) is already registered. The inventory is left unchanged.
    pub fn insert(&mut self, comic: Comic) -> Result<(), ShopError> {
        let key = fold_key(comic.id());
        if self.ids.contains(&key) {
            return Err(ShopError::duplicate(KeyKind::ComicId, comic.id()));
        }

        self.ids.insert(key);
        self.comics.push(comic);
        Ok(())
    }

    /// Find a comic by id, ignoring case
    pub fn find(&self, id: &str) -> Option<&Comic> {
        self.comics.iter().find(|comic| comic.has_id(id))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.comics.iter().position(|comic| comic.has_id(id))
    }

    /// Look up a comic that is on the shelf
    ///
    /// # Errors
    ///
    /// * `ComicNotFound` - no comic has this id
    /// * `AlreadyUnavailable` - the comic is sold or reserved
    pub fn ensure_available(&self, id: &str) -> Result<&Comic, ShopError> {
        let comic = self
            .find(id)
            .ok_or_else(|| ShopError::comic_not_found(id))?;

        if !comic.status().is_available() {
            return Err(ShopError::already_unavailable(
                comic.id(),
                comic.title(),
                comic.status().as_str(),
            ));
        }

        Ok(comic)
    }

    /// Remove an available comic
    ///
    /// # Errors
    ///
    /// Same as [`ensure_available`](Self::ensure_available); sold and reserved
    /// comics stay in the inventory.
    pub fn remove(&mut self, id: &str) -> Result<Comic, ShopError> {
        self.ensure_available(id)?;

        let index = self
            .position(id)
            .ok_or_else(|| ShopError::comic_not_found(id))?;
        let comic = self.comics.remove(index);
        self.ids.remove(&fold_key(comic.id()));

        Ok(comic)
    }

    /// Set the status of a comic and return it
    ///
    /// # Errors
    ///
    /// Returns `ComicNotFound` if no comic has this id.
    pub fn set_status(&mut self, id: &str, status: ComicStatus) -> Result<&Comic, ShopError> {
        let comic = self
            .comics
            .iter_mut()
            .find(|comic| comic.has_id(id))
            .ok_or_else(|| ShopError::comic_not_found(id))?;

        comic.set_status(status);
        Ok(&*comic)
    }

    /// All comics in insertion order
    pub fn comics(&self) -> &[Comic] {
        &self.comics
    }

    pub fn len(&self) -> usize {
        self.comics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comics.is_empty()
    }
}
