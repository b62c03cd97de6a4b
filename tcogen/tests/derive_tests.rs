//! Accepted uses of `#[derive(ComponentOpts)]`.

#[test]
fn derive_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui_pass/*.rs");
}
