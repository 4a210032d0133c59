//! User-related types for the comic shop

use super::error::ShopError;
use super::id::fold_key;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A registered customer
///
/// Two users are equal when their ids match case-insensitively. The email is
/// optional; when present it is stored trimmed and lower-cased.
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    name: String,
    email: Option<String>,
}

impl User {
    /// Create a user, trimming the id and name and normalizing the email
    ///
    /// An email that is empty after trimming is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::MissingField` if the id or name is empty.
    pub fn new(id: &str, name: &str, email: Option<&str>) -> Result<Self, ShopError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ShopError::missing_field("User", "ID"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ShopError::missing_field("User", "name"));
        }

        Ok(User {
            id: id.to_string(),
            name: name.to_string(),
            email: normalize_email(email),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Replace the email, applying the same normalization as `new`
    pub fn set_email(&mut self, email: Option<&str>) {
        self.email = normalize_email(email);
    }
}

/// Trim and lower-case an email; blank input becomes `None`
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        fold_key(&self.id) == fold_key(&other.id)
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_key(&self.id).hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: '{}', Nombre: '{}', Email: '{}'",
            self.id,
            self.name,
            self.email.as_deref().unwrap_or("N/A")
        )
    }
}
