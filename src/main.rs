//! Comic Shop CLI
//!
//! Interactive terminal front-end for the comic shop inventory and user
//! registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-dir /srv/shop
//! cargo run -- --comics stock.csv --users clientes.csv --sales-log ventas.txt
//! RUST_LOG=debug cargo run
//! ```
//!
//! The menu is read from stdin and written to stdout; diagnostics go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (menu exit or end of input)
//! - 1: The terminal could not be read or written

use comic_shop::cli;
use comic_shop::console::Console;
use comic_shop::ComicShop;
use std::io;
use std::process;
use tracing::info;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = cli::init_logging(&args.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = args.to_storage_config();
    info!(
        comics = %config.comics_csv.display(),
        users = %config.users_csv.display(),
        sales_log = %config.sales_log.display(),
        "Opening comic shop"
    );
    let mut shop = ComicShop::open(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&mut shop, stdin.lock(), stdout.lock());
    if let Err(e) = console.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
