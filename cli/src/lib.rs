//! conllulex command line interface.
//!
//! - `args`: clap definitions for the `enrich` and `to-json` subcommands
//! - `commands`: reading rows, running the session, writing results
//! - `report`: numbered finding report with a summary line

mod args;
mod commands;
mod error;
mod report;

pub use args::{Cli, Command, EnrichArgs, ToJsonArgs, DEFAULT_CORPUS};
pub use commands::{enrich, run, to_json};
pub use error::{CliError, CliResult};
pub use report::format_report;
