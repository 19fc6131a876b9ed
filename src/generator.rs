//! Project generation pipeline.
//!
//! Stages run in order and stop at the first handled failure:
//! 1. validate the template
//! 2. resolve the project name
//! 3. ensure the target directory does not exist
//! 4. copy the template tree and patch `package.json`
//! 5. report success
//!
//! Handled failures are reported by the stage that detects them and become
//! an [`Outcome`]. Anything else is returned as an error. Nothing is rolled
//! back: a copy that fails midway leaves the partial tree on disk.

use crate::constants::PACKAGE_FILE;
use crate::error::{Error, Result};
use crate::prompt::{resolve_project_name, Prompter};
use crate::registry::Registry;
use crate::reporter::Reporter;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// How a generation run ended, unless it failed unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project was generated at this path.
    Created(PathBuf),
    /// The user cancelled the project name prompt.
    Cancelled,
    /// No template of the requested name exists.
    UnknownTemplate,
    /// Something already exists at the target path.
    DirectoryExists(PathBuf),
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Created(_) | Outcome::Cancelled => 0,
            Outcome::UnknownTemplate | Outcome::DirectoryExists(_) => 1,
        }
    }
}

/// Drives one generation run from template lookup to the success banner.
pub struct Generator<'a, W: Write> {
    registry: &'a Registry,
    prompter: &'a dyn Prompter,
    reporter: &'a mut Reporter<W>,
    working_dir: PathBuf,
}

impl<'a, W: Write> Generator<'a, W> {
    /// Creates a generator that creates projects relative to `working_dir`.
    ///
    /// # Arguments
    /// * `registry` - Where templates are looked up
    /// * `prompter` - Asked for the project name when none is supplied
    /// * `reporter` - Receives every user-facing line
    /// * `working_dir` - Parent of the generated project directory
    pub fn new<P: Into<PathBuf>>(
        registry: &'a Registry,
        prompter: &'a dyn Prompter,
        reporter: &'a mut Reporter<W>,
        working_dir: P,
    ) -> Self {
        Self { registry, prompter, reporter, working_dir: working_dir.into() }
    }

    /// Runs the whole pipeline for `template`.
    ///
    /// # Returns
    /// * `Result<Outcome>` - How the run ended; `Err` only for unexpected failures
    pub fn generate(&mut self, template: &str, project_name: Option<&str>) -> Result<Outcome> {
        let Some(template_dir) = self.validate_template(template)? else {
            return Ok(Outcome::UnknownTemplate);
        };

        let Some(name) = resolve_project_name(self.prompter, project_name)? else {
            self.reporter.cancelled()?;
            return Ok(Outcome::Cancelled);
        };

        let target_dir = self.working_dir.join(&name);
        if entry_exists(&target_dir) {
            debug!("Target {} already exists", target_dir.display());
            self.reporter.directory_exists(&name)?;
            return Ok(Outcome::DirectoryExists(target_dir));
        }

        self.reporter.generating(&name)?;
        copy_template(&template_dir, &target_dir)?;
        patch_package_name(&target_dir, &name)?;

        self.reporter.success(&name)?;
        Ok(Outcome::Created(target_dir))
    }

    /// Returns the template location, or `None` after reporting the
    /// unknown template together with the available ones.
    fn validate_template(&mut self, template: &str) -> Result<Option<PathBuf>> {
        if self.registry.exists(template) {
            let metadata = self.registry.metadata(template);
            self.reporter.selected_template(template, &metadata)?;
            return Ok(Some(self.registry.template_dir(template)));
        }

        let available = self.registry.entries()?;
        self.reporter.unknown_template(template, &available)?;
        Ok(None)
    }
}

fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Recursively copies every file, directory and symlink of `source` into
/// `target`.
///
/// # Arguments
/// * `source` - Template directory to clone
/// * `target` - Directory to create; must not lie inside `source`
///
/// # Errors
/// * `Error::CopyIntoItselfError` if `target` is inside `source`; nothing is created
/// * `Error::IoError` / `Error::WalkError` on any filesystem failure
pub fn copy_template(source: &Path, target: &Path) -> Result<()> {
    debug!("Copying {} to {}", source.display(), target.display());
    ensure_outside(source, target)?;

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative_path = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::IoError(std::io::Error::other(e)))?;
        let target_path = target.join(relative_path);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target_path)?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if file_type.is_symlink() {
            debug!("Linking: {}", target_path.display());
            copy_symlink(entry.path(), &target_path)?;
        } else {
            debug!("Copying file: {}", target_path.display());
            fs::copy(entry.path(), &target_path)?;
        }
    }
    Ok(())
}

/// Refuses a target that resolves to `source` or a path below it.
fn ensure_outside(source: &Path, target: &Path) -> Result<()> {
    let source_root = fs::canonicalize(source)?;

    // The target does not exist yet; resolve its closest existing ancestor.
    let mut existing = target;
    let mut rest = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = if existing.as_os_str().is_empty() {
        std::env::current_dir()?
    } else {
        fs::canonicalize(existing)?
    };
    resolved.extend(rest.iter().rev());

    if resolved.starts_with(&source_root) {
        return Err(Error::CopyIntoItselfError {
            template: source.to_path_buf(),
            target: target.to_path_buf(),
        });
    }
    Ok(())
}

/// Recreates the link at `link` under `target` without following it.
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let destination = fs::read_link(link)?;

    #[cfg(unix)]
    std::os::unix::fs::symlink(&destination, target)?;

    #[cfg(windows)]
    {
        if fs::metadata(link).map(|m| m.is_dir()).unwrap_or(false) {
            std::os::windows::fs::symlink_dir(&destination, target)?;
        } else {
            std::os::windows::fs::symlink_file(&destination, target)?;
        }
    }

    #[cfg(not(any(unix, windows)))]
    fs::copy(link, target)?;

    Ok(())
}

/// Sets the `name` field of the top-level `package.json`, if there is one.
///
/// Other fields keep their values and order; the file is rewritten with
/// two-space indentation.
pub fn patch_package_name(project_dir: &Path, name: &str) -> Result<()> {
    let manifest_path = project_dir.join(PACKAGE_FILE);
    if !manifest_path.is_file() {
        debug!("No {} to patch", manifest_path.display());
        return Ok(());
    }

    let content = fs::read_to_string(&manifest_path)?;
    let mut manifest: serde_json::Value = serde_json::from_str(&content)?;
    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| Error::InvalidManifestError { path: manifest_path.clone() })?;
    fields.insert("name".to_string(), serde_json::Value::String(name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    fs::write(&manifest_path, rendered)?;
    debug!("Set package name to '{}' in {}", name, manifest_path.display());
    Ok(())
}
