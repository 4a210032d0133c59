//! Core business logic module
//!
//! This module contains the shop's registries and their orchestration:
//! - `traits` - Seams for interchangeable implementations (clock)
//! - `config` - Locations of the data files
//! - `inventory` - Comic inventory with id uniqueness and status changes
//! - `user_registry` - Registered users with id and email uniqueness
//! - `shop` - Orchestration, persistence and the sales log

pub mod config;
pub mod inventory;
pub mod shop;
pub mod traits;
pub mod user_registry;

pub use config::StorageConfig;
pub use inventory::ComicInventory;
pub use shop::ComicShop;
pub use traits::{Clock, FixedClock, SystemClock};
pub use user_registry::UserRegistry;
