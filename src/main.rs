//! node-help - Node.js API documentation in the terminal
//!
//! Serves documentation entries from a local mirror of nodejs.org, refreshing
//! the mirror when it is more than a week old.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use node_help::app::App;
use node_help::cli::{Cli, StartupConfig};
use node_help::ui::columns::DEFAULT_WIDTH;

/// Sets up logging to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "node_help=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Current terminal width, or the default when stdout is not a terminal
fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut startup = match StartupConfig::from_cli(&cli) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    startup.color &= io::stdout().is_terminal();

    init_tracing(startup.verbose);

    let app = App::new(startup).with_width(terminal_width());
    match app.execute().await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
