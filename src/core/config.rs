//! Storage configuration
//!
//! Where the shop keeps its two CSV registries and the sales log.

use std::path::{Path, PathBuf};

/// Default directory for the data files
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the inventory CSV
pub const COMICS_FILE: &str = "comics.csv";

/// File name of the user registry CSV
pub const USERS_FILE: &str = "usuarios.csv";

/// File name of the sales log
pub const SALES_LOG_FILE: &str = "ventas_log.txt";

/// Paths of every file the shop reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Inventory CSV (`ID,Titulo,Autor,Estado`)
    pub comics_csv: PathBuf,

    /// User registry CSV (`ID,Nombre,Email`)
    pub users_csv: PathBuf,

    /// Append-only sales and returns log
    pub sales_log: PathBuf,
}

impl StorageConfig {
    /// Place all three files inside `dir` under their default names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        StorageConfig {
            comics_csv: dir.join(COMICS_FILE),
            users_csv: dir.join(USERS_FILE),
            sales_log: dir.join(SALES_LOG_FILE),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StorageConfig::default();
        assert_eq!(config.comics_csv, Path::new("data").join("comics.csv"));
        assert_eq!(config.users_csv, Path::new("data").join("usuarios.csv"));
        assert_eq!(config.sales_log, Path::new("data").join("ventas_log.txt"));
    }

    #[test]
    fn test_in_dir() {
        let config = StorageConfig::in_dir("/srv/shop");
        assert_eq!(config.comics_csv, PathBuf::from("/srv/shop/comics.csv"));
        assert_eq!(config.users_csv, PathBuf::from("/srv/shop/usuarios.csv"));
        assert_eq!(config.sales_log, PathBuf::from("/srv/shop/ventas_log.txt"));
    }
}
