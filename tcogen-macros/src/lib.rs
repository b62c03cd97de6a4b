use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedComponent;

/// Registers the `#[opts(...)]` field attribute and checks its tags.
///
/// The options module itself is written by `tcogen` next to the source file.
/// The derive validates tags at compile time so a bad `default` points at the
/// field, and implements `tcogen::ComponentOpts` with the field names and tag
/// defaults.
#[proc_macro_derive(ComponentOpts, attributes(opts))]
pub fn derive_component_opts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedComponent::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
