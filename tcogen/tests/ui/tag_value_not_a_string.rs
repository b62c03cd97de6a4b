//! Compile-fail test: tag values must be string literals.

use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Bad {
    #[opts(default = 5)]
    pub n: i64,
}

fn main() {}
