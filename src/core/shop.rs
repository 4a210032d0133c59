//! Comic shop manager
//!
//! This module provides the `ComicShop` that orchestrates the inventory, the
//! user registry and their persistence.
//!
//! The shop enforces business rules such as:
//! - Unique comic ids, user ids and emails (duplicates are skipped with a warning)
//! - Only available comics can be sold or removed
//! - Every successful mutation rewrites the matching CSV file
//! - Every sale and return appends a line to the sales log
//!
//! # Persistence failures
//!
//! Saving happens after the in-memory change has been applied. A failed save
//! is logged and the in-memory state is kept, so the registry and its file
//! can diverge until the next successful save.

use crate::core::config::StorageConfig;
use crate::core::inventory::ComicInventory;
use crate::core::traits::{Clock, SystemClock};
use crate::core::user_registry::UserRegistry;
use crate::io::{
    comic_from_row, comic_to_row, read_csv, save_csv, user_from_row, user_to_row, SalesLog,
    COMICS_HEADER, USERS_HEADER,
};
use crate::types::{Comic, ComicStatus, ShopError, User};
use std::path::Path;
use tracing::{error, info, warn};

/// Inventory and user registry of the shop
///
/// Owns both in-memory registries and mirrors every change to disk.
pub struct ComicShop {
    inventory: ComicInventory,
    users: UserRegistry,
    storage: StorageConfig,
    sales_log: SalesLog,
    clock: Box<dyn Clock>,
}

impl ComicShop {
    /// Open the shop, loading both registries from disk
    ///
    /// Missing or unreadable files start the matching registry empty.
    pub fn open(storage: StorageConfig) -> Self {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    /// Open the shop with a custom timestamp source for the sales log
    pub fn open_with_clock(storage: StorageConfig, clock: Box<dyn Clock>) -> Self {
        let inventory = load_inventory(&storage.comics_csv);
        let users = load_users(&storage.users_csv);
        let sales_log = SalesLog::new(storage.sales_log.clone());

        ComicShop {
            inventory,
            users,
            storage,
            sales_log,
            clock,
        }
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    // Comics

    /// Add a comic to the inventory
    ///
    /// Returns `false` without changing anything if the id is already
    /// registered.
    pub fn add_comic(&mut self, comic: Comic) -> bool {
        let id = comic.id().to_string();
        let title = comic.title().to_string();

        if let Err(e) = self.inventory.insert(comic) {
            warn!("{}; the comic was not added", e);
            return false;
        }

        info!(id = %id, "Comic '{}' added to the inventory", title);
        self.persist_inventory();
        true
    }

    /// Remove an available comic
    ///
    /// Returns `false` if the comic does not exist or is sold or reserved.
    pub fn remove_comic(&mut self, id: &str) -> bool {
        match self.inventory.remove(id) {
            Ok(comic) => {
                info!(id = %comic.id(), "Comic '{}' removed from the inventory", comic.title());
                self.persist_inventory();
                true
            }
            Err(e) => {
                warn!("Cannot remove comic '{}': {}", id, e);
                false
            }
        }
    }

    /// Find a comic by id, ignoring case
    pub fn find_comic(&self, id: &str) -> Option<&Comic> {
        self.inventory.find(id)
    }

    /// All comics in insertion order
    pub fn list_comics(&self) -> &[Comic] {
        self.inventory.comics()
    }

    /// Sell or reserve a comic to a registered user
    ///
    /// Marks the comic as sold, saves the inventory and appends a sale line
    /// to the sales log.
    ///
    /// # Errors
    ///
    /// * `ComicNotFound` - no comic has this id
    /// * `AlreadyUnavailable` - the comic is already sold or reserved
    /// * `UserNotFound` - no user has this id
    pub fn sell(&mut self, comic_id: &str, user_id: &str) -> Result<Comic, ShopError> {
        self.inventory.ensure_available(comic_id)?;

        let user = self
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| ShopError::user_not_found(user_id))?;

        let comic = self
            .inventory
            .set_status(comic_id, ComicStatus::Sold)?
            .clone();
        self.persist_inventory();

        if let Err(e) = self.sales_log.record_sale(&comic, &user, self.clock.now()) {
            self.report_log_failure(&e);
        }

        info!(
            comic = %comic.id(),
            user = %user.id(),
            "Sale recorded: '{}' to {}",
            comic.title(),
            user.name()
        );
        Ok(comic)
    }

    /// Put a sold or reserved comic back on the shelf
    ///
    /// Returns `Ok(false)` and changes nothing if the comic is already
    /// available.
    ///
    /// # Errors
    ///
    /// Returns `ComicNotFound` if no comic has this id.
    pub fn mark_available(&mut self, comic_id: &str) -> Result<bool, ShopError> {
        let comic = self
            .inventory
            .find(comic_id)
            .ok_or_else(|| ShopError::comic_not_found(comic_id))?;

        if comic.status().is_available() {
            info!(id = %comic.id(), "Comic '{}' is already available", comic.title());
            return Ok(false);
        }

        let comic = self
            .inventory
            .set_status(comic_id, ComicStatus::Available)?
            .clone();
        self.persist_inventory();

        if let Err(e) = self.sales_log.record_return(&comic, self.clock.now()) {
            self.report_log_failure(&e);
        }

        info!(id = %comic.id(), "Comic '{}' is available again", comic.title());
        Ok(true)
    }

    // Users

    /// Register a user
    ///
    /// Returns `false` without changing anything if the id or email is
    /// already registered.
    pub fn add_user(&mut self, user: User) -> bool {
        let id = user.id().to_string();
        let name = user.name().to_string();

        if let Err(e) = self.users.insert(user) {
            warn!("{}; the user was not added", e);
            return false;
        }

        info!(id = %id, "User '{}' added", name);
        self.persist_users();
        true
    }

    /// Remove a user and free its email
    ///
    /// Users with comics still marked as sold to them can be removed; the
    /// sales log keeps the record of the sale.
    pub fn remove_user(&mut self, id: &str) -> bool {
        match self.users.remove(id) {
            Some(user) => {
                info!(id = %user.id(), "User '{}' removed", user.name());
                self.persist_users();
                true
            }
            None => {
                warn!("User with ID '{}' not found", id);
                false
            }
        }
    }

    /// Look up a user by id, ignoring case
    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Whether a registered user already claims this email
    pub fn email_in_use(&self, email: &str) -> bool {
        self.users.email_in_use(email)
    }

    /// Replace or clear a user's email
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no user has this id
    /// * `DuplicateKey` - another user already uses the new email
    pub fn update_user_email(&mut self, id: &str, email: Option<&str>) -> Result<(), ShopError> {
        self.users.update_email(id, email)?;
        self.persist_users();
        Ok(())
    }

    /// All users ordered by id
    pub fn list_users(&self) -> Vec<&User> {
        self.users.by_id()
    }

    /// All users ordered by name
    pub fn list_users_by_name(&self) -> Vec<&User> {
        self.users.by_name()
    }

    // Persistence

    /// Rewrite the inventory CSV from memory
    pub fn save_inventory(&self) -> Result<(), ShopError> {
        save_csv(
            &self.storage.comics_csv,
            &COMICS_HEADER,
            self.inventory.comics(),
            comic_to_row,
        )
    }

    /// Rewrite the user registry CSV from memory, in id order
    pub fn save_users(&self) -> Result<(), ShopError> {
        save_csv(
            &self.storage.users_csv,
            &USERS_HEADER,
            self.users.by_id(),
            user_to_row,
        )
    }

    fn persist_inventory(&self) {
        if let Err(e) = self.save_inventory() {
            error!(
                "Failed to save the inventory to {}: {}",
                self.storage.comics_csv.display(),
                e
            );
        }
    }

    fn persist_users(&self) {
        if let Err(e) = self.save_users() {
            error!(
                "Failed to save the users to {}: {}",
                self.storage.users_csv.display(),
                e
            );
        }
    }

    fn report_log_failure(&self, e: &ShopError) {
        error!(
            "Failed to write the sales log {}: {}",
            self.sales_log.path().display(),
            e
        );
    }
}

fn load_inventory(path: &Path) -> ComicInventory {
    match read_csv(path, comic_from_row) {
        Ok(comics) => {
            let inventory = ComicInventory::from_comics(comics);
            info!(
                count = inventory.len(),
                "Inventory loaded from {}",
                path.display()
            );
            inventory
        }
        Err(e) => {
            warn!(
                "Could not load the inventory from {}; starting with an empty inventory: {}",
                path.display(),
                e
            );
            ComicInventory::new()
        }
    }
}

fn load_users(path: &Path) -> UserRegistry {
    match read_csv(path, user_from_row) {
        Ok(users) => {
            let registry = UserRegistry::from_users(users);
            info!(
                count = registry.len(),
                "Users loaded from {}",
                path.display()
            );
            registry
        }
        Err(e) => {
            warn!(
                "Could not load users from {}; starting with no users: {}",
                path.display(),
                e
            );
            UserRegistry::new()
        }
    }
}
