use std::io;
use std::path::PathBuf;

use proc_macro2::Span;
use thiserror::Error;

/// Fatal conditions raised while walking, parsing, or writing files.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Reading a candidate source file failed.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A source file is not valid Rust. Aborts the whole walk.
    #[error("failed to parse {}:{line}:{column}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        source: syn::Error,
    },

    /// The directory walk itself failed (permissions, broken links, loops).
    #[error("failed to walk {}: {source}", root.display())]
    Walk { root: PathBuf, source: walkdir::Error },

    /// An annotated record cannot be generated. Carries the rendered
    /// [`RecordError`] since spans are not `Send`.
    #[error("{}:{line}: {message}", path.display())]
    Record { path: PathBuf, line: usize, message: String },

    /// The emitted token stream did not form a valid file.
    #[error("failed to render generated code for {}: {source}", path.display())]
    Render { path: PathBuf, source: syn::Error },

    /// Creating or writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Problems with a single annotated record or one of its fields.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid #[opts] tag on {record}.{field}: {message}")]
    InvalidTag {
        record: String,
        field: String,
        message: String,
        span: Span,
    },

    #[error("default `{value}` for {record}.{field} is not a Rust expression")]
    InvalidDefault {
        record: String,
        field: String,
        value: String,
        span: Span,
    },

    #[error("{record}: generated name `{name}` is produced more than once")]
    NameCollision { record: String, name: String, span: Span },
}

impl RecordError {
    /// Location of the offending field or record.
    pub fn span(&self) -> Span {
        match self {
            RecordError::InvalidTag { span, .. }
            | RecordError::InvalidDefault { span, .. }
            | RecordError::NameCollision { span, .. } => *span,
        }
    }

    /// Convert into a `syn::Error` pointing at the offending tokens.
    pub fn into_syn_error(self) -> syn::Error {
        syn::Error::new(self.span(), self.to_string())
    }

    /// Attach the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> GenerateError {
        GenerateError::Record {
            path: path.into(),
            line: self.span().start().line,
            message: self.to_string(),
        }
    }
}
