//! Compile-fail test: defaults must parse as Rust expressions.

use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Bad {
    #[opts(default = "1 +")]
    pub n: i64,
}

fn main() {}
