//! Functional-options generator for templ component records.
//!
//! This crate walks a source tree for structs marked with a
//! `//templ:component-opts` line comment and writes a `<stem>_tcogen.rs`
//! file next to each annotated source file. The generated module offers a
//! boxed option per field, a default constructor seeded from
//! `#[opts(default = "...")]` tags, and `with` helpers that apply options
//! in order.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     let report = tcogen_build::generate_opts()
//!         .root("src/")
//!         .run()
//!         .expect("Failed to generate component options");
//!
//!     for output in &report.generated {
//!         println!("cargo:rerun-if-changed={}", output.source.display());
//!     }
//! }
//! ```
//!
//! Then mount the generated file next to the record:
//!
//! ```ignore
//! //templ:component-opts
//! #[derive(tcogen::ComponentOpts)]
//! pub struct Sample {
//!     pub name: String,
//!     #[opts(default = "true")]
//!     pub happy: bool,
//! }
//!
//! #[path = "sample_tcogen.rs"]
//! mod sample_tcogen;
//! pub use sample_tcogen::sample;
//! ```

pub mod comments;
pub mod emitter;
pub mod error;
pub mod fields;
pub mod generator;
pub mod imports;
pub mod scanner;

pub use emitter::{GeneratedFile, emit_record, module_ident};
pub use error::{GenerateError, RecordError};
pub use fields::{FieldDescriptor, FieldSet, FieldType, Scalar, TagMap, extract_fields};
pub use generator::{FileOutcome, GeneratedOutput, GenerationReport, OptsGenerator, render_source};
pub use scanner::{AnnotatedRecord, DIRECTIVE, SkipReason, SkippedRecord};

/// Create a new generator with default settings.
///
/// # Example
///
/// ```ignore
/// tcogen_build::generate_opts()
///     .root("src/")
///     .exclude_dir("vendor")
///     .run()
///     .expect("Failed to generate component options");
/// ```
pub fn generate_opts() -> OptsGenerator {
    OptsGenerator::new()
}
