//! I/O module
//!
//! Handles the shop's data files.
//!
//! # Components
//!
//! - `csv_file` - Generic CSV reading and writing (header skipping, full rewrites)
//! - `csv_format` - Row layout of the comics and users files
//! - `sales_log` - Append-only sales and returns log

pub mod csv_file;
pub mod csv_format;
pub mod sales_log;

pub use csv_file::{read_csv, read_csv_from, save_csv, write_csv};
pub use csv_format::{
    comic_from_row, comic_to_row, user_from_row, user_to_row, COMICS_HEADER, USERS_HEADER,
};
pub use sales_log::{LogEntry, SalesLog, TIMESTAMP_FORMAT};
