// CLI module
// Command-line arguments and logging setup

mod args;
mod logging;

pub use args::CliArgs;
pub use logging::init_logging;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the error or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
