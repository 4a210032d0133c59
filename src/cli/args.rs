use crate::core::config::{DEFAULT_DATA_DIR, StorageConfig};
use clap::Parser;
use std::path::PathBuf;

/// Manage a comic shop's inventory, customers and sales from the terminal
#[derive(Parser, Debug)]
#[command(name = "comic-shop")]
#[command(about = "Manage a comic shop's inventory, customers and sales", long_about = None)]
pub struct CliArgs {
    /// Directory holding the data files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "COMIC_SHOP_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        help = "Directory for comics.csv, usuarios.csv and ventas_log.txt"
    )]
    pub data_dir: PathBuf,

    /// Inventory CSV, overriding the one in the data directory
    #[arg(long = "comics", value_name = "FILE", help = "Path to the inventory CSV")]
    pub comics: Option<PathBuf>,

    /// User registry CSV, overriding the one in the data directory
    #[arg(long = "users", value_name = "FILE", help = "Path to the users CSV")]
    pub users: Option<PathBuf>,

    /// Sales log, overriding the one in the data directory
    #[arg(long = "sales-log", value_name = "FILE", help = "Path to the sales log")]
    pub sales_log: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Diagnostic log level (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Resolve the data file locations
    ///
    /// Starts from the default file names inside `--data-dir` and replaces
    /// each one given explicitly.
    pub fn to_storage_config(&self) -> StorageConfig {
        let mut config = StorageConfig::in_dir(&self.data_dir);
        if let Some(path) = &self.comics {
            config.comics_csv = path.clone();
        }
        if let Some(path) = &self.users {
            config.users_csv = path.clone();
        }
        if let Some(path) = &self.sales_log {
            config.sales_log = path.clone();
        }
        config
    }
}
