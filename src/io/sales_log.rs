//! Append-only log of sales and returns
//!
//! Every successful sale and every return to the shelf appends exactly one
//! line. The log is an audit trail only; it is never read back and is
//! independent of the CSV state files.

use crate::types::{Comic, ShopError, User};
use chrono::NaiveDateTime;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp layout of every log line (`yyyy-MM-dd HH:mm:ss`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single event in the sales log
#[derive(Debug, Clone, Copy)]
pub enum LogEntry<'a> {
    /// A comic was sold or reserved to a user
    Sale {
        at: NaiveDateTime,
        comic: &'a Comic,
        user: &'a User,
    },

    /// A sold or reserved comic went back on the shelf
    Return { at: NaiveDateTime, comic: &'a Comic },
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Sale { at, comic, user } => write!(
                f,
                "VENTA/RESERVA - Fecha/Hora: {}, Cómic ID: {}, Título: {}, Usuario ID: {}, Nombre Usuario: {}",
                at.format(TIMESTAMP_FORMAT),
                comic.id(),
                comic.title(),
                user.id(),
                user.name()
            ),
            LogEntry::Return { at, comic } => write!(
                f,
                "DISPONIBLE - Fecha/Hora: {}, Cómic ID: {}, Título: {}, Estado anterior: vendido/reservado, Estado actual: {}",
                at.format(TIMESTAMP_FORMAT),
                comic.id(),
                comic.title(),
                comic.status()
            ),
        }
    }
}

/// Handle to the sales log file
#[derive(Debug, Clone)]
pub struct SalesLog {
    path: PathBuf,
}

impl SalesLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SalesLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line, creating the file if needed
    pub fn append(&self, entry: &LogEntry<'_>) -> Result<(), ShopError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ShopError::file_unavailable(parent, &e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ShopError::file_unavailable(&self.path, &e))?;

        writeln!(file, "{}", entry)?;

        Ok(())
    }

    pub fn record_sale(
        &self,
        comic: &Comic,
        user: &User,
        at: NaiveDateTime,
    ) -> Result<(), ShopError> {
        self.append(&LogEntry::Sale { at, comic, user })
    }

    pub fn record_return(&self, comic: &Comic, at: NaiveDateTime) -> Result<(), ShopError> {
        self.append(&LogEntry::Return { at, comic })
    }
}
