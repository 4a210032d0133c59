//! Error types for the comic shop
//!
//! This module defines every error that can surface while managing the
//! inventory and the user registry. Errors are designed to be printed
//! directly by the console front-end.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: comic or user not found
//! - **Transition Errors**: comic already sold or reserved
//! - **Registration Errors**: duplicate comic id, user id or email
//! - **Validation Errors**: missing required fields, unknown status, bad input
//! - **File Errors**: CSV files or the sales log could not be read or written

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Which unique key a duplicate registration collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    ComicId,
    UserId,
    Email,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::ComicId => "comic ID",
            KeyKind::UserId => "user ID",
            KeyKind::Email => "email",
        };
        f.write_str(name)
    }
}

/// Main error type for the comic shop
///
/// Each variant carries enough context for the console to print a useful
/// message without further lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    /// No comic with the given id is in the inventory
    #[error("Comic with ID '{id}' is not in the inventory")]
    ComicNotFound {
        /// The id that was searched for
        id: String,
    },

    /// No user with the given id is registered
    ///
    /// A sale cannot be recorded for an unknown customer; register the user first.
    #[error("User with ID '{id}' does not exist; register the user first")]
    UserNotFound {
        /// The id that was searched for
        id: String,
    },

    /// The comic is already sold or reserved
    #[error("Comic '{title}' (ID: {id}) has already been {status}")]
    AlreadyUnavailable {
        /// Comic id
        id: String,
        /// Comic title
        title: String,
        /// Current status token
        status: String,
    },

    /// A comic id, user id or email is already registered
    ///
    /// The manager resolves this locally: the registration is skipped
    /// and nothing changes.
    #[error("The {key} '{value}' is already registered")]
    DuplicateKey {
        /// Which key collided
        key: KeyKind,
        /// The colliding value
        value: String,
    },

    /// A required field was empty after trimming
    #[error("{entity} {field} is required")]
    MissingField {
        /// Entity being built ("Comic" or "User")
        entity: &'static str,
        /// Name of the empty field
        field: &'static str,
    },

    /// A status token that is not available, sold or reserved
    #[error("Invalid comic status '{value}'")]
    InvalidStatus {
        /// The rejected token
        value: String,
    },

    /// Console input that could not be interpreted
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem
        message: String,
    },

    /// A data file could not be opened
    #[error("Cannot open {path}: {message}")]
    FileUnavailable {
        /// Path of the file
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV reading or writing error
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the error
        message: String,
    },
}

impl From<std::io::Error> for ShopError {
    fn from(error: std::io::Error) -> Self {
        ShopError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ShopError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ShopError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

impl ShopError {
    /// Create a ComicNotFound error
    pub fn comic_not_found(id: &str) -> Self {
        ShopError::ComicNotFound { id: id.to_string() }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(id: &str) -> Self {
        ShopError::UserNotFound { id: id.to_string() }
    }

    /// Create an AlreadyUnavailable error
    pub fn already_unavailable(id: &str, title: &str, status: &str) -> Self {
        ShopError::AlreadyUnavailable {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
        }
    }

    /// Create a DuplicateKey error
    pub fn duplicate(key: KeyKind, value: &str) -> Self {
        ShopError::DuplicateKey {
            key,
            value: value.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        ShopError::MissingField { entity, field }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(value: &str) -> Self {
        ShopError::InvalidStatus {
            value: value.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(message: &str) -> Self {
        ShopError::InvalidInput {
            message: message.to_string(),
        }
    }

    /// Create a FileUnavailable error
    pub fn file_unavailable(path: &Path, error: &std::io::Error) -> Self {
        ShopError::FileUnavailable {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Whether this is one of the "not found" lookups
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShopError::ComicNotFound { .. } | ShopError::UserNotFound { .. }
        )
    }
}
