//! Command-line interface parsing for node-help
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! the mirror configuration plus the single action the run should perform.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{MirrorConfig, DEFAULT_MAX_AGE_DAYS};

/// Error types for CLI argument handling
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing to look up and no other action requested
    #[error("Missing query. Pass a name such as 'readFile', or use --info, --doc or --list-docs")]
    MissingQuery,

    /// No data directory given and none could be derived from the home directory
    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

/// node-help - Node.js API documentation in the terminal
#[derive(Parser, Debug)]
#[command(name = "node-help")]
#[command(about = "Node.js API documentation from a local, weekly refreshed mirror")]
#[command(version)]
pub struct Cli {
    /// Name to look up, e.g. `readFile` or `fs.readFile`
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Print runtime and tool versions
    #[arg(long)]
    pub info: bool,

    /// Show matches as introspected objects (properties and methods)
    #[arg(long)]
    pub inspect: bool,

    /// Print a longform document, e.g. `fs` or `fs.md`
    #[arg(long, value_name = "NAME")]
    pub doc: Option<String>,

    /// List the mirrored longform documents
    #[arg(long)]
    pub list_docs: bool,

    /// Refresh the mirror regardless of its age
    #[arg(long)]
    pub refresh: bool,

    /// Directory holding the mirror
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Age in days after which the mirror is refreshed
    #[arg(long, value_name = "DAYS", default_value_t = DEFAULT_MAX_AGE_DAYS)]
    pub max_age_days: u32,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log refresh activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a run does once the mirror is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print versions; needs no mirror
    Info,
    /// List longform document names
    ListDocs,
    /// Print one longform document
    Doc(String),
    /// Look up API entries
    Query { query: String, inspect: bool },
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub action: Action,
    pub mirror: MirrorConfig,
    pub force_refresh: bool,
    pub color: bool,
    pub verbose: bool,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// `--info` wins over `--list-docs`, which wins over `--doc`, which wins
    /// over a query.
    ///
    /// # Returns
    /// * `Err(CliError::MissingQuery)` if no action was requested
    /// * `Err(CliError::NoDataDir)` if no data directory can be determined
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let action = if cli.info {
            Action::Info
        } else if cli.list_docs {
            Action::ListDocs
        } else if let Some(doc) = &cli.doc {
            Action::Doc(doc.clone())
        } else {
            match cli.query.as_deref().map(str::trim) {
                Some(query) if !query.is_empty() => Action::Query {
                    query: query.to_string(),
                    inspect: cli.inspect,
                },
                _ => return Err(CliError::MissingQuery),
            }
        };

        let mirror = match &cli.data_dir {
            Some(dir) => MirrorConfig::with_data_dir(dir.clone()),
            None => MirrorConfig::default_location().ok_or(CliError::NoDataDir)?,
        }
        .with_max_age_days(cli.max_age_days);

        Ok(StartupConfig {
            action,
            mirror,
            force_refresh: cli.refresh,
            color: !cli.no_color,
            verbose: cli.verbose,
        })
    }
}
