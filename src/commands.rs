//! Command dispatch and the read-only `list` and `info` commands.
//!
//! Exit statuses differ on purpose: `list` logs any error and still
//! succeeds, while `gen` and `info` fail with status 1.

use crate::cli::{Args, Commands};
use crate::error::{default_error_handler, Error, Result};
use crate::generator::Generator;
use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::reporter::Reporter;
use colored::Colorize;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Runs the parsed command and returns the process exit status.
///
/// Unexpected errors from `gen` and `info` go to [`default_error_handler`].
pub fn run(args: Args, prompter: &dyn Prompter) -> i32 {
    let registry = Registry::new(args.templates_dir);
    debug!("Using templates from {}", registry.root().display());
    let mut reporter = Reporter::stdout();

    let result = match args.command {
        Commands::Gen { template, project_name } => match std::env::current_dir() {
            Ok(cwd) => generate(
                &registry,
                prompter,
                &mut reporter,
                &cwd,
                &template,
                project_name.as_deref(),
            ),
            Err(e) => Err(Error::IoError(e)),
        },
        Commands::List => Ok(list(&registry, &mut reporter)),
        Commands::Info { template } => info(&registry, &mut reporter, &template),
    };

    match result {
        Ok(code) => code,
        Err(err) => default_error_handler(err),
    }
}

/// Runs the generation pipeline and maps its outcome to an exit status.
pub fn generate<W: Write>(
    registry: &Registry,
    prompter: &dyn Prompter,
    reporter: &mut Reporter<W>,
    working_dir: &Path,
    template: &str,
    project_name: Option<&str>,
) -> Result<i32> {
    let outcome = Generator::new(registry, prompter, reporter, working_dir)
        .generate(template, project_name)?;
    debug!("Generation finished: {:?}", outcome);
    Ok(outcome.exit_code())
}

/// Prints every template with its descriptor. Never fails.
pub fn list<W: Write>(registry: &Registry, reporter: &mut Reporter<W>) -> i32 {
    if let Err(err) = try_list(registry, reporter) {
        eprintln!("{}", format!("\n✖ Error: {err}").red());
    }
    0
}

fn try_list<W: Write>(registry: &Registry, reporter: &mut Reporter<W>) -> Result<()> {
    if !registry.root_exists() {
        return reporter.no_templates_dir();
    }

    let templates = registry.entries()?;
    if templates.is_empty() {
        return reporter.no_templates();
    }
    reporter.template_list(&templates)
}

/// Prints the descriptor of one template, or the unknown template listing.
pub fn info<W: Write>(
    registry: &Registry,
    reporter: &mut Reporter<W>,
    template: &str,
) -> Result<i32> {
    if !registry.exists(template) {
        let available = registry.entries()?;
        reporter.unknown_template(template, &available)?;
        return Ok(1);
    }

    let metadata = registry.metadata(template);
    reporter.template_info(template, &metadata)?;
    Ok(0)
}
