//! User input handling.
//! The pipeline only talks to the [`Prompter`] trait so it can be driven
//! without a terminal.

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use dialoguer::Input;
use log::debug;
use std::io;

/// Interactive input capability.
pub trait Prompter {
    /// Asks for a non-empty string, suggesting `default`.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the submitted value
    /// * `Ok(None)` - the user cancelled the prompt
    fn ask_non_empty_string(&self, prompt: &str, default: &str) -> Result<Option<String>>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_non_empty_string(&self, prompt: &str, default: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
                if input.is_empty() {
                    Err("Project name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text();

        match answer {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(e)) if is_cancellation(&e) => {
                debug!("Prompt cancelled: {}", e);
                Ok(None)
            }
            Err(e) => Err(Error::PromptError(e.to_string())),
        }
    }
}

fn is_cancellation(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

/// Resolves the project name from the command line or the user.
///
/// A non-empty `supplied` name is returned as is. Otherwise the user is
/// asked once; `Ok(None)` means the prompt was cancelled.
pub fn resolve_project_name(
    prompter: &dyn Prompter,
    supplied: Option<&str>,
) -> Result<Option<String>> {
    match supplied {
        Some(name) if !name.is_empty() => Ok(Some(name.to_string())),
        _ => prompter.ask_non_empty_string("What is your project name?", DEFAULT_PROJECT_NAME),
    }
}
