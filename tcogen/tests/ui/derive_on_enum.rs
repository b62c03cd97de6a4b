//! Compile-fail test: the derive only accepts structs.

use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub enum Mode {
    Light,
    Dark,
}

fn main() {}
