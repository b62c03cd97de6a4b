//! Compile-fail test: a tag key may appear once per field.

use tcogen::ComponentOpts;

#[derive(ComponentOpts)]
pub struct Bad {
    #[opts(default = "1")]
    #[opts(default = "2")]
    pub n: i64,
}

fn main() {}
