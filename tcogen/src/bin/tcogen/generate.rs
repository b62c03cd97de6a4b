use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, Table, presets};
use serde::Serialize;
use tcogen::GenerationReport;

use crate::context::ProjectContext;
use crate::output::Reporter;

/// Run summary shown after a walk.
#[derive(Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    report: GenerationReport,
}

impl RunSummary {
    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.report.root).unwrap_or(path)
    }

    /// One row per companion file, then one per skipped record.
    pub fn to_table(&self, plain: bool) -> Table {
        let mut table = Table::new();
        table.load_preset(if plain {
            presets::ASCII_FULL
        } else {
            presets::UTF8_FULL_CONDENSED
        });
        table.set_header(["Source", "Output", "Records"].map(|title| {
            let cell = Cell::new(title).add_attribute(Attribute::Bold);
            if plain { cell } else { cell.fg(Color::Cyan) }
        }));

        if self.report.generated.is_empty() {
            table.add_row(vec![Cell::new("No annotated records found"), Cell::new(""), Cell::new("")]);
        }
        for output in &self.report.generated {
            table.add_row(vec![
                Cell::new(self.relative(&output.source).display()),
                Cell::new(self.relative(&output.output).display()),
                Cell::new(output.records.join(", ")),
            ]);
        }
        for skipped in &self.report.skipped {
            let reason = Cell::new(format!("skipped: {}", skipped.reason));
            table.add_row(vec![
                Cell::new(self.relative(&skipped.path).display()),
                if plain { reason } else { reason.fg(Color::Yellow) },
                Cell::new(&skipped.record),
            ]);
        }

        table
    }

    pub fn to_compact(&self) -> String {
        format!(
            "scanned={} generated={} records={} skipped={}",
            self.report.scanned,
            self.report.generated.len(),
            self.report.record_count(),
            self.report.skipped.len()
        )
    }
}

/// Walk `root` (or the current directory) and write every companion file.
pub fn handle_generate(root: Option<PathBuf>, reporter: &Reporter) -> Result<()> {
    let ctx = ProjectContext::load(root.as_deref())?;
    if ctx.has_config_file() {
        reporter.note(&format!("Using {}", ctx.config_path.display()));
    }
    reporter.note(&format!("Walking {}", ctx.root.display()));

    let report = ctx
        .generator()
        .run()
        .with_context(|| format!("Generation failed under {}", ctx.root.display()))?;

    let summary = RunSummary { report };
    for generated in &summary.report.generated {
        reporter.generated(summary.relative(&generated.output), &generated.records);
    }
    for skipped in &summary.report.skipped {
        reporter.skipped(summary.relative(&skipped.path), &skipped.record, skipped.reason);
    }
    reporter.note(&format!(
        "{} file(s) generated from {} scanned",
        summary.report.generated.len(),
        summary.report.scanned
    ));

    reporter.summary(&summary)
}
