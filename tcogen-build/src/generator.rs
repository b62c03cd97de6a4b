//! Directory walk that writes a companion file for every annotated source file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::emitter::GeneratedFile;
use crate::error::GenerateError;
use crate::scanner::{SkippedRecord, SourceFile, scan_file};

/// Suffix of generated files.
pub const OUTPUT_SUFFIX: &str = "_tcogen.rs";

/// Suffix of files produced by the templ compiler, which are never scanned.
pub const TEMPL_SUFFIX: &str = "_templ.rs";

/// Builder for configuring and running the generator.
#[derive(Debug, Clone)]
pub struct OptsGenerator {
    root: PathBuf,
    exclude_dirs: Vec<String>,
    follow_links: bool,
}

impl OptsGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_dirs: vec!["target".to_string()],
            follow_links: false,
        }
    }

    /// Set the directory to walk.
    ///
    /// Default: `.`
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = path.into();
        self
    }

    /// Skip directories with this name below the root.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.exclude_dirs.push(name.into());
        self
    }

    /// Replace the excluded directory names.
    ///
    /// Default: `["target"]`
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Follow symbolic links during the walk.
    ///
    /// Default: `false`
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Walk the root and write `<stem>_tcogen.rs` next to every file that
    /// contains annotated records.
    ///
    /// The first fatal error stops the walk. Files written before it stay on disk.
    pub fn run(self) -> Result<GenerationReport, GenerateError> {
        let mut report = GenerationReport {
            root: self.root.clone(),
            scanned: 0,
            generated: Vec::new(),
            skipped: Vec::new(),
        };

        let walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

        for entry in walker {
            let entry = entry.map_err(|source| GenerateError::Walk {
                root: self.root.clone(),
                source,
            })?;
            if entry.file_type().is_dir() || !is_candidate(entry.path()) {
                continue;
            }

            let path = entry.path();
            log::debug!("scanning {}", path.display());
            report.scanned += 1;

            let source = SourceFile::load(path)?;
            let outcome = render_file(&source)?;
            report.skipped.extend(outcome.skipped);

            let Some(rendered) = outcome.rendered else {
                continue;
            };

            let output = output_path(path);
            for record in &outcome.records {
                log::info!("Found {}.{record}; generating {}...", source.stem(), output.display());
            }
            fs::write(&output, rendered).map_err(|source| GenerateError::Write {
                path: output.clone(),
                source,
            })?;

            report.generated.push(GeneratedOutput {
                source: path.to_path_buf(),
                output,
                records: outcome.records,
            });
        }

        Ok(report)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.exclude_dirs.iter().any(|excluded| *excluded == name)
    }
}

impl Default for OptsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// What was produced for one source file.
#[derive(Debug, Default)]
pub struct FileOutcome {
    /// Names of the records that were generated, in source order.
    pub records: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
    /// Rendered companion file, or `None` when nothing was annotated.
    pub rendered: Option<String>,
}

/// Parse, scan, and render `source` as the file at `path` without touching the filesystem.
pub fn render_source(path: &Path, source: &str) -> Result<FileOutcome, GenerateError> {
    render_file(&SourceFile::parse(path, source)?)
}

fn render_file(source: &SourceFile) -> Result<FileOutcome, GenerateError> {
    let scanned = scan_file(source).map_err(|err| err.in_file(&source.path))?;
    if scanned.records.is_empty() {
        return Ok(FileOutcome {
            skipped: scanned.skipped,
            ..FileOutcome::default()
        });
    }

    let output = output_path(&source.path);
    let generated = GeneratedFile::for_records(source, &scanned.records).map_err(|err| err.in_file(&source.path))?;

    Ok(FileOutcome {
        records: scanned.records.iter().map(|record| record.name()).collect(),
        skipped: scanned.skipped,
        rendered: Some(generated.render(&output)?),
    })
}

/// Whether `path` names a Rust source file that may carry annotations.
pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".rs") && !name.ends_with(OUTPUT_SUFFIX) && !name.ends_with(TEMPL_SUFFIX)
}

/// `view/sample.rs` becomes `view/sample_tcogen.rs`.
pub fn output_path(source: &Path) -> PathBuf {
    let name = source.to_string_lossy();
    let stem = name.strip_suffix(".rs").unwrap_or(&name);
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// A companion file written during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedOutput {
    pub source: PathBuf,
    pub output: PathBuf,
    pub records: Vec<String>,
}

/// Summary of a generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    /// Number of candidate files read.
    pub scanned: usize,
    pub generated: Vec<GeneratedOutput>,
    pub skipped: Vec<SkippedRecord>,
}

impl GenerationReport {
    /// Total number of records that received generated code.
    pub fn record_count(&self) -> usize {
        self.generated.iter().map(|output| output.records.len()).sum()
    }
}
