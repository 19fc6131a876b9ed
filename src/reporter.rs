//! Human readable console output.
//!
//! The reporter is the single line-oriented sink every command writes to.
//! It holds no state besides the writer.

use crate::constants::BIN_NAME;
use crate::error::Result;
use crate::metadata::Metadata;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

const DIVIDER: &str = "──────────────────────────────────────────────────";
const STEPS_DIVIDER: &str = "-------------------------------------------";

/// Formats command output and writes it line by line to `W`.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    /// Reporter writing to the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter over any writer.
    ///
    /// # Arguments
    /// * `out` - Destination of every line, e.g. stdout or a `Vec<u8>` buffer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one line of output.
    pub fn write_line<T: Display>(&mut self, text: T) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn blank(&mut self) -> Result<()> {
        self.write_line("")
    }

    /// Banner shown once a template has been found.
    pub fn selected_template(&mut self, template: &str, metadata: &Metadata) -> Result<()> {
        self.blank()?;
        self.write_line(
            format!("ℹ Selected Template: {}", metadata.display_name(template).bold()).cyan(),
        )?;
        if let Some(description) = metadata.description() {
            self.write_line(format!("  {description}").dimmed())?;
        }
        if !metadata.features.is_empty() {
            self.write_line("  Features:".dimmed())?;
            for feature in &metadata.features {
                self.write_line(format!("   - {feature}").dimmed())?;
            }
        }
        self.blank()
    }

    /// Unknown template message followed by the available templates.
    pub fn unknown_template(
        &mut self,
        template: &str,
        available: &[(String, Metadata)],
    ) -> Result<()> {
        self.blank()?;
        self.write_line(format!("✖ Unknown template: {}", template.bold()).red())?;
        if available.is_empty() {
            return Ok(());
        }

        self.write_line("  Available templates:".yellow())?;
        for (name, metadata) in available {
            let description = metadata
                .description()
                .map(|d| format!(" - {d}"))
                .unwrap_or_default();
            self.write_line(format!("    {}{}", name.cyan(), description.dimmed()))?;
        }
        self.blank()
    }

    pub fn directory_exists(&mut self, name: &str) -> Result<()> {
        self.blank()?;
        self.write_line(format!("✖ Directory {} already exists.", name.bold()).red())?;
        self.write_line(
            "  Please choose a different name or remove the existing directory.".yellow(),
        )?;
        self.blank()
    }

    pub fn cancelled(&mut self) -> Result<()> {
        self.blank()?;
        self.write_line("Operation cancelled.".yellow())
    }

    pub fn generating(&mut self, name: &str) -> Result<()> {
        self.blank()?;
        self.write_line(format!("🚀 Generating project {}...", name.cyan()).blue())
    }

    /// Success banner with the suggested next steps.
    pub fn success(&mut self, name: &str) -> Result<()> {
        self.blank()?;
        self.write_line(format!("✔ Project {} created successfully!", name.bold()).green())?;
        self.blank()?;
        self.write_line(STEPS_DIVIDER.dimmed())?;
        self.write_line("Next steps:".bold())?;
        self.write_line(format!("  1. {}", format!("cd {name}").cyan()))?;
        self.write_line(format!("  2. {}", "bun install".cyan()))?;
        self.write_line(format!("  3. {}", "bun dev".cyan()))?;
        self.write_line(STEPS_DIVIDER.dimmed())?;
        self.blank()
    }

    pub fn no_templates_dir(&mut self) -> Result<()> {
        self.write_line("No templates directory found.".yellow())
    }

    pub fn no_templates(&mut self) -> Result<()> {
        self.write_line("No templates found.".yellow())
    }

    /// Full listing used by the `list` command.
    pub fn template_list(&mut self, templates: &[(String, Metadata)]) -> Result<()> {
        self.blank()?;
        self.write_line("📦 Available Templates".blue().bold())?;
        self.blank()?;

        for (name, metadata) in templates {
            self.write_line(format!("🔹 {}", metadata.display_name(name).bold()).cyan())?;
            if let Some(description) = metadata.description() {
                self.write_line(format!("   {}", description.italic()))?;
            }
            self.blank()?;

            if !metadata.tech_stack.is_empty() {
                self.write_line("   🛠  Tech Stack:".white().bold())?;
                for (key, value) in &metadata.tech_stack {
                    self.write_line(format!("      {}: {}", key.dimmed(), value))?;
                }
                self.blank()?;
            }

            if !metadata.features.is_empty() {
                self.write_line("   ✨ Key Features:".white().bold())?;
                for feature in &metadata.features {
                    self.write_line(format!("      {feature}").dimmed())?;
                }
            }

            self.blank()?;
            self.write_line(format!("   {DIVIDER}").dimmed())?;
            self.blank()?;
        }
        Ok(())
    }

    /// Detailed view used by the `info` command.
    pub fn template_info(&mut self, template: &str, metadata: &Metadata) -> Result<()> {
        self.blank()?;
        self.write_line(
            format!("📘 Template Information: {}", metadata.display_name(template))
                .blue()
                .bold(),
        )?;
        self.write_line(DIVIDER.dimmed())?;

        if let Some(description) = metadata.description() {
            self.blank()?;
            self.write_line(description.white())?;
        }
        self.blank()?;

        if !metadata.tech_stack.is_empty() {
            self.write_line("🛠  Tech Stack".yellow().bold())?;
            for (key, value) in &metadata.tech_stack {
                self.write_line(format!("   • {}: {}", key.bold(), value.dimmed()))?;
            }
            self.blank()?;
        }

        if !metadata.features.is_empty() {
            self.write_line("✨ Key Features".green().bold())?;
            for feature in &metadata.features {
                self.write_line(format!("   {feature}"))?;
            }
            self.blank()?;
        }

        self.write_line("🚀 Usage".magenta().bold())?;
        self.write_line(format!("   {BIN_NAME} gen {template} <project-name>"))?;
        self.blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Reporter<Vec<u8>>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn api_clean() -> Metadata {
        Metadata::parse(
            r#"{"name":"API Clean","description":"REST starter","features":["auth","db"],
                "techStack":{"runtime":"bun"}}"#,
        )
    }

    #[test]
    fn test_selected_template_banner() {
        let output = render(|r| r.selected_template("api-clean", &api_clean()));
        assert!(output.contains("ℹ Selected Template: API Clean"));
        assert!(output.contains("  REST starter"));
        assert!(output.contains("   - auth\n"));
        assert!(output.contains("   - db\n"));
    }

    #[test]
    fn test_selected_template_without_descriptor() {
        let output = render(|r| r.selected_template("spa-basic", &Metadata::default()));
        assert!(output.contains("ℹ Selected Template: spa-basic"));
        assert!(!output.contains("Features:"));
    }

    #[test]
    fn test_unknown_template_lists_alternatives() {
        let available = vec![
            ("api-clean".to_string(), api_clean()),
            ("spa-basic".to_string(), Metadata::default()),
        ];
        let output = render(|r| r.unknown_template("nope", &available));
        assert!(output.contains("✖ Unknown template: nope"));
        assert!(output.contains("Available templates:"));
        assert!(output.contains("    api-clean - REST starter\n"));
        assert!(output.contains("    spa-basic\n"));
    }

    #[test]
    fn test_unknown_template_without_alternatives() {
        let output = render(|r| r.unknown_template("nope", &[]));
        assert!(output.contains("✖ Unknown template: nope"));
        assert!(!output.contains("Available templates:"));
    }

    #[test]
    fn test_success_next_steps() {
        let output = render(|r| r.success("demo"));
        assert!(output.contains("✔ Project demo created successfully!"));
        assert!(output.contains("  1. cd demo"));
        assert!(output.contains("  2. bun install"));
        assert!(output.contains("  3. bun dev"));
    }

    #[test]
    fn test_template_info_usage_hint() {
        let output = render(|r| r.template_info("api-clean", &api_clean()));
        assert!(output.contains("📘 Template Information: API Clean"));
        assert!(output.contains("   • runtime: bun"));
        assert!(output.contains("✨ Key Features"));
        assert!(output.contains("   fast-setup gen api-clean <project-name>"));
    }
}
