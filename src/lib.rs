//! Comic Shop Library
//! # Overview
//!
//! This library tracks a comic-book shop's inventory and customer registry,
//! persisting both to flat CSV files and appending every sale and return to a
//! plain-text log.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Comic, User, ShopError)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Comic inventory and status changes
//!   - [`core::user_registry`] - Registered users
//!   - [`core::shop`] - Orchestration and persistence
//! - [`io`] - CSV files and the sales log
//! - [`console`] - Interactive menu
//!
//! # Comic States
//!
//! - **available**: on the shelf; can be sold or removed
//! - **sold** / **reserved**: held by a customer; can only be made available again
//!
//! # Data Files
//!
//! - `comics.csv`: `ID,Titulo,Autor,Estado`
//! - `usuarios.csv`: `ID,Nombre,Email`
//! - `ventas_log.txt`: one line per sale or return

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use core::{ComicInventory, ComicShop, StorageConfig, UserRegistry};
pub use types::{Comic, ComicStatus, KeyKind, ShopError, User};
