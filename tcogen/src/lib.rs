//! Functional options for templ component records.
//!
//! Mark a struct with a `//templ:component-opts` line comment and run the
//! `tcogen` binary (or [`generate_opts`] from a build script). Each annotated
//! `x.rs` gets an `x_tcogen.rs` companion holding one module per record:
//!
//! - `Opt`, a boxed change to a single field;
//! - one setter per named field returning an `Opt`;
//! - `default_opts()`, seeded from `#[opts(default = "...")]` tags;
//! - `with(opts)` and the `with` method, which apply options in order;
//! - `<field>_str()` for `bool`, `i64`, and `f64` fields.
//!
//! Deriving [`ComponentOpts`] registers the `#[opts]` attribute with the
//! compiler and rejects malformed tags at the field that carries them.
//!
//! ```ignore
//! use tcogen::ComponentOpts;
//!
//! //templ:component-opts
//! #[derive(ComponentOpts)]
//! pub struct Sample {
//!     pub name: String,
//!     pub age: i64,
//!     #[opts(default = "true")]
//!     pub happy: bool,
//! }
//!
//! #[path = "sample_tcogen.rs"]
//! mod sample_tcogen;
//! pub use sample_tcogen::sample;
//!
//! let value = sample::with([sample::name("Ada".into()), sample::age(36)]);
//! assert!(value.happy);
//! assert_eq!(value.age_str(), "36");
//! ```

pub use tcogen_build as build;
pub use tcogen_build::{GenerateError, GenerationReport, OptsGenerator, RecordError, generate_opts};
pub use tcogen_macros::ComponentOpts;

/// Field metadata for a record deriving [`ComponentOpts`](macro@ComponentOpts).
pub trait ComponentOpts {
    /// Named fields in declaration order, without any `r#` prefix.
    const FIELDS: &'static [&'static str];

    /// `(field, raw tag value)` for every field with a `default` tag.
    const DEFAULTS: &'static [(&'static str, &'static str)];

    /// Raw `default` tag value for `field`, if it has one.
    fn default_tag(field: &str) -> Option<&'static str> {
        Self::DEFAULTS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }
}
