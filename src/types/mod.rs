//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `comic`: Comic entity and its availability status
//! - `user`: Registered customers
//! - `id`: Case-insensitive id folding
//! - `error`: Error types for the comic shop

pub mod comic;
pub mod error;
pub mod id;
pub mod user;

pub use comic::{Comic, ComicStatus};
pub use error::{KeyKind, ShopError};
pub use id::{fold_key, same_key};
pub use user::User;
