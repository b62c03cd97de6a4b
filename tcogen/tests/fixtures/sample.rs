//! The Sample component's record.

use tcogen::ComponentOpts;

// Sample provides a series of options for the Sample component.
//
//templ:component-opts
#[derive(Debug, Clone, PartialEq, ComponentOpts)]
pub struct Sample {
    pub name: String,
    pub age: i64,
    #[opts(default = "true")]
    pub happy: bool,
    pub score: f64,
}

#[path = "sample_tcogen.rs"]
mod sample_tcogen;
pub use sample_tcogen::sample;
