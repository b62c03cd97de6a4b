//! Compile-fail test: a field cannot take the name of a generated helper.

use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Bad {
    pub with: bool,
}

fn main() {}
