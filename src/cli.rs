//! Command-line interface implementation for fast-setup.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_TEMPLATES_DIR;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Command-line arguments structure for fast-setup.
#[derive(Parser, Debug)]
#[command(
    name = "fast-setup",
    version,
    about = "fast-setup: generate new projects from ready-made templates",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing one subdirectory per template
    #[arg(short, long, global = true, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate a new project from a template
    Gen {
        /// Name of the template to copy
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Name of the project directory to create; asked for when omitted
        #[arg(value_name = "PROJECT_NAME")]
        project_name: Option<String>,
    },

    /// List available templates and their features
    #[command(visible_alias = "ls")]
    List,

    /// Show detailed information about a specific template
    Info {
        /// Name of the template to describe
        #[arg(value_name = "TEMPLATE")]
        template: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With the status returned by [`report_parse_error`] when parsing fails
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => std::process::exit(report_parse_error(e)),
    }
}

/// Prints an argument parsing failure and returns the exit status to use.
///
/// # Returns
/// * `0` after printing the help text if required arguments are missing
/// * clap's own status for other errors, `--help` and `--version`
pub fn report_parse_error(e: clap::Error) -> i32 {
    if e.kind() == ErrorKind::MissingRequiredArgument {
        println!("{}", "Error: Missing required arguments.".red());
        if let Err(e) = Args::command().print_help() {
            log::error!("Failed to print help: {}", e);
        }
        return 0;
    }

    if let Err(err) = e.print() {
        log::error!("Failed to print usage error: {}", err);
    }
    e.exit_code()
}
