//! User registry
//!
//! This module provides the `UserRegistry` component that holds every
//! registered customer keyed by folded id, plus the set of emails in use.
//!
//! # Uniqueness
//!
//! User ids are unique ignoring case. Emails are unique across the registry
//! when present; they are stored lower-cased so the check is effectively
//! case-insensitive too.

use crate::types::user::normalize_email;
use crate::types::{fold_key, KeyKind, ShopError, User};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Registered users with id and email uniqueness
#[derive(Debug, Default)]
pub struct UserRegistry {
    /// Map of folded user id to user
    users: HashMap<String, User>,

    /// Emails currently claimed by a user
    emails: HashSet<String>,
}

impl UserRegistry {
    pub fn new() -> Self {
        UserRegistry {
            users: HashMap::new(),
            emails: HashSet::new(),
        }
    }

    /// Build a registry from loaded users, skipping rows that collide
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut registry = Self::new();
        for user in users {
            if let Err(e) = registry.insert(user) {
                warn!("Ignoring repeated user row: {}", e);
            }
        }
        registry
    }

    /// Register a user
    ///
    /// # Errors
    ///
    /// Returns `ShopError::DuplicateKey` if the id or the email is already
    /// taken. The registry is left unchanged.
    pub fn insert(&mut self, user: User) -> Result<(), ShopError> {
        let key = fold_key(user.id());
        if self.users.contains_key(&key) {
            return Err(ShopError::duplicate(KeyKind::UserId, user.id()));
        }
        if let Some(email) = user.email() {
            if self.emails.contains(email) {
                return Err(ShopError::duplicate(KeyKind::Email, email));
            }
            self.emails.insert(email.to_string());
        }

        self.users.insert(key, user);
        Ok(())
    }

    /// Remove a user, freeing its email
    pub fn remove(&mut self, id: &str) -> Option<User> {
        let user = self.users.remove(&fold_key(id))?;
        if let Some(email) = user.email() {
            self.emails.remove(email);
        }
        Some(user)
    }

    /// Look up a user by id, ignoring case
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(&fold_key(id))
    }

    /// Replace or clear a user's email
    ///
    /// # Errors
    ///
    /// * `UserNotFound` - no user has this id
    /// * `DuplicateKey` - another user already uses the new email
    pub fn update_email(&mut self, id: &str, email: Option<&str>) -> Result<(), ShopError> {
        let key = fold_key(id);
        let new_email = normalize_email(email);

        let current = match self.users.get(&key) {
            Some(user) => user.email().map(str::to_string),
            None => return Err(ShopError::user_not_found(id)),
        };

        if let Some(new) = &new_email {
            if current.as_ref() != Some(new) && self.emails.contains(new) {
                return Err(ShopError::duplicate(KeyKind::Email, new));
            }
        }

        if let Some(old) = current {
            self.emails.remove(&old);
        }
        if let Some(new) = &new_email {
            self.emails.insert(new.clone());
        }
        if let Some(user) = self.users.get_mut(&key) {
            user.set_email(new_email.as_deref());
        }

        Ok(())
    }

    /// Whether any user currently claims this email
    pub fn email_in_use(&self, email: &str) -> bool {
        normalize_email(Some(email)).is_some_and(|e| self.emails.contains(&e))
    }

    /// All users sorted by id
    pub fn by_id(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.id().cmp(b.id()));
        users
    }

    /// All users sorted by name, ties kept in id order
    pub fn by_name(&self) -> Vec<&User> {
        let mut users = self.by_id();
        users.sort_by(|a, b| a.name().cmp(b.name()));
        users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
