//! Progress lines and the closing run summary.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use tcogen::build::SkipReason;

use crate::generate::RunSummary;
use crate::theme::{FAILED, GENERATED, Mark, NOTE, SKIPPED};

/// How the run summary is printed.
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// Table of generated and skipped records (default)
    #[default]
    Table,
    /// The run report as JSON, for scripting
    Json,
    /// Counts on a single line
    Compact,
}

#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Writes what a generation run did to the terminal.
pub struct Reporter {
    options: OutputOptions,
}

impl Reporter {
    pub fn new(options: OutputOptions) -> Self {
        Self { options }
    }

    /// Progress lines are dropped when quiet and kept off stdout for JSON.
    fn chatty(&self) -> bool {
        !self.options.quiet && self.options.format != OutputFormat::Json
    }

    fn line(&self, mark: Mark, message: &str) -> String {
        if self.options.no_color {
            format!("{} {message}", mark.glyph)
        } else {
            format!("{} {}", mark.glyph.color(mark.color), message.color(mark.color))
        }
    }

    /// One companion file was written.
    pub fn generated(&self, output: &Path, records: &[String]) {
        if self.chatty() {
            println!("{}", self.line(GENERATED, &format!("{} {}", output.display(), records.join(", "))));
        }
    }

    pub fn skipped(&self, source: &Path, record: &str, reason: SkipReason) {
        if self.chatty() {
            eprintln!(
                "{}",
                self.line(SKIPPED, &format!("{}: {record} {reason}; skipped", source.display()))
            );
        }
    }

    /// Shown with `--verbose` only.
    pub fn note(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.line(NOTE, message));
        }
    }

    /// Always printed, even when quiet.
    pub fn failed(&self, err: &anyhow::Error) {
        eprintln!("{}", self.line(FAILED, &format!("Error: {err:#}")));
    }

    pub fn summary(&self, summary: &RunSummary) -> Result<()> {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => println!("{}", summary.to_table(self.options.no_color)),
            OutputFormat::Compact => println!("{}", summary.to_compact()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporter(format: OutputFormat, quiet: bool) -> Reporter {
        Reporter::new(OutputOptions {
            format,
            quiet,
            no_color: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_json_and_quiet_runs_are_not_chatty() {
        assert!(reporter(OutputFormat::Table, false).chatty());
        assert!(reporter(OutputFormat::Compact, false).chatty());
        assert!(!reporter(OutputFormat::Json, false).chatty());
        assert!(!reporter(OutputFormat::Table, true).chatty());
    }

    #[test]
    fn test_plain_lines_carry_the_glyph() {
        let reporter = reporter(OutputFormat::Table, false);

        assert_eq!(reporter.line(GENERATED, "sample_tcogen.rs Sample"), "✓ sample_tcogen.rs Sample");
        assert_eq!(reporter.line(SKIPPED, "empty.rs: Empty"), "⚠ empty.rs: Empty");
    }
}
