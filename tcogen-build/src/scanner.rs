//! Source file scanner for discovering records marked with the directive.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use syn::{Ident, Item, ItemStruct, Visibility};

use crate::comments::CommentMap;
use crate::error::{GenerateError, RecordError};
use crate::fields::{FieldDescriptor, extract_fields};

/// The comment that triggers code generation for the struct it is attached to.
pub const DIRECTIVE: &str = "//templ:component-opts";

/// A parsed source file plus its comment map.
pub struct SourceFile {
    pub path: PathBuf,
    pub syntax: syn::File,
    pub comments: CommentMap,
}

impl SourceFile {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse `content` as the file at `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, GenerateError> {
        let syntax = syn::parse_file(content).map_err(|source| {
            let start = source.span().start();
            GenerateError::Parse {
                path: path.to_path_buf(),
                line: start.line,
                column: start.column + 1,
                source,
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            syntax,
            comments: CommentMap::build(content),
        })
    }

    /// Module-style name of the file, e.g. `sample` for `view/sample.rs`.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A struct carrying the directive, with its fields extracted.
#[derive(Debug, Clone)]
pub struct AnnotatedRecord {
    pub ident: Ident,
    pub fields: Vec<FieldDescriptor>,
    /// Unnamed (tuple) fields, filled with defaults by the constructor.
    pub positional: usize,
}

impl AnnotatedRecord {
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}

/// Why an annotated record was left out of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The struct declares no fields at all.
    NoFields,
    /// The struct has lifetime, type, or const parameters.
    Generic,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoFields => write!(f, "has no fields"),
            SkipReason::Generic => write!(f, "has generic parameters"),
        }
    }
}

/// An annotated record that was reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub record: String,
    pub reason: SkipReason,
}

/// Result of scanning one file.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<AnnotatedRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Find every top-level struct in `file` that has the directive attached.
pub fn scan_file(file: &SourceFile) -> Result<ScanOutcome, RecordError> {
    let mut outcome = ScanOutcome::default();

    for item in &file.syntax.items {
        let Item::Struct(item_struct) = item else {
            continue;
        };
        if !has_directive(item_struct, &file.comments) {
            continue;
        }

        let name = item_struct.ident.to_string();
        let reason = if item_struct.fields.is_empty() {
            Some(SkipReason::NoFields)
        } else if !item_struct.generics.params.is_empty() {
            Some(SkipReason::Generic)
        } else {
            None
        };

        if let Some(reason) = reason {
            log::warn!("{name} {reason}; skipping");
            outcome.skipped.push(SkippedRecord {
                path: file.path.clone(),
                record: name,
                reason,
            });
            continue;
        }

        let fields = extract_fields(&item_struct.ident, &item_struct.fields)?;
        outcome.records.push(AnnotatedRecord {
            ident: item_struct.ident.clone(),
            fields: fields.named,
            positional: fields.positional,
        });
    }

    for group in file.comments.groups() {
        if group.contains(DIRECTIVE) && (group.trailing || group.closes_previous()) {
            log::debug!(
                "{}:{}: directive belongs to the code above it; ignoring",
                file.path.display(),
                group.start_line
            );
        }
    }

    Ok(outcome)
}

/// Whether a comment group leading into `item` contains the directive.
///
/// A group leads into the item when the first code after it lies between the
/// item's first line (attributes included) and the line of its name, so the
/// directive may sit before, after, or among doc comments and attributes.
fn has_directive(item: &ItemStruct, comments: &CommentMap) -> bool {
    let first = first_line(item);
    let name = item.ident.span().start().line;
    comments.attached(first..=name).any(|group| group.contains(DIRECTIVE))
}

fn first_line(item: &ItemStruct) -> usize {
    let span = match (item.attrs.first(), &item.vis) {
        (Some(attr), _) => attr.pound_token.spans[0],
        (None, Visibility::Public(token)) => token.span,
        (None, Visibility::Restricted(restricted)) => restricted.pub_token.span,
        (None, Visibility::Inherited) => item.struct_token.span,
    };
    span.start().line
}
