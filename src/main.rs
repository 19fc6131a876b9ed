//! fast-setup's main application entry point.
//! Parses the command line, configures logging and hands over to the
//! command dispatcher.

use fast_setup::{cli::get_args, commands, logger::init_logger, prompt::DialoguerPrompter};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let prompter = DialoguerPrompter::new();
    let code = commands::run(args, &prompter);
    std::process::exit(code);
}
