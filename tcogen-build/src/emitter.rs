//! Emits the functional-options module for annotated records.

use std::collections::HashSet;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;
use syn::ext::IdentExt;

use crate::error::{GenerateError, RecordError};
use crate::fields::{FieldDescriptor, Scalar};
use crate::imports::ImportSet;
use crate::scanner::{AnnotatedRecord, SourceFile};

/// Tool name written into the generated header.
pub const GENERATOR_NAME: &str = "tcogen";

/// A generated companion file, ready to render.
pub struct GeneratedFile {
    pub header: Vec<String>,
    pub imports: ImportSet,
    pub records: Vec<TokenStream>,
}

impl GeneratedFile {
    /// Assemble the companion file for `records` found in `source`.
    pub fn for_records(source: &SourceFile, records: &[AnnotatedRecord]) -> Result<Self, RecordError> {
        let mut modules = HashSet::new();
        for record in records {
            let module = module_ident(&record.ident).to_string();
            if !modules.insert(module.clone()) {
                return Err(RecordError::NameCollision {
                    record: record.name(),
                    name: module,
                    span: record.ident.span(),
                });
            }
        }

        let names = records
            .iter()
            .map(|record| format!("`{}`", record.ident))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            header: vec![
                format!(" Code generated by {GENERATOR_NAME}; DO NOT EDIT."),
                String::new(),
                format!(" This file contains functions and methods for use with {names} in templ components."),
            ],
            imports: ImportSet::for_records(source, records),
            records: records.iter().map(emit_record).collect(),
        })
    }

    pub fn to_tokens(&self) -> TokenStream {
        let header = &self.header;
        let imports = self.imports.to_tokens();
        let records = &self.records;

        quote! {
            #(#![doc = #header])*
            #![allow(dead_code)]

            #imports

            #(#records)*
        }
    }

    /// Render to source text. `path` is only used for error reporting.
    pub fn render(&self, path: &Path) -> Result<String, GenerateError> {
        let syntax_tree = syn::parse2(self.to_tokens()).map_err(|source| GenerateError::Render {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(prettyplease::unparse(&syntax_tree))
    }
}

/// Generate the options module for a single record.
///
/// Declarations come out in a fixed order: the `Opt` type, `default_opts`,
/// the free `with`, the `with` method, then for each named field its setter
/// followed by its `_str` method when the field has one.
pub fn emit_record(record: &AnnotatedRecord) -> TokenStream {
    let record_ident = &record.ident;
    let module = module_ident(record_ident);
    let doc = format!(" Functional options for [`{record_ident}`].");

    let defaults = default_members(record);
    let field_items: Vec<TokenStream> = record
        .fields
        .iter()
        .map(|field| {
            let setter = emit_setter(record_ident, field);
            let stringifier = emit_stringifier(record_ident, field);
            quote! { #setter #stringifier }
        })
        .collect();

    quote! {
        #[doc = #doc]
        pub mod #module {
            use super::*;

            /// A deferred change to a single field.
            pub type Opt = Box<dyn FnOnce(&mut #record_ident)>;

            /// Returns a value with every tagged default applied.
            pub fn default_opts() -> #record_ident {
                #record_ident {
                    #(#defaults),*
                }
            }

            /// Builds a value from [`default_opts`] and applies `opts` in order.
            pub fn with(opts: impl IntoIterator<Item = Opt>) -> #record_ident {
                let mut out = default_opts();
                out.with(opts);
                out
            }

            impl #record_ident {
                /// Applies `opts` in order and returns `self` for chaining.
                pub fn with(&mut self, opts: impl IntoIterator<Item = Opt>) -> &mut Self {
                    for opt in opts {
                        opt(&mut *self);
                    }
                    self
                }
            }

            #(#field_items)*
        }
    }
}

fn default_members(record: &AnnotatedRecord) -> Vec<TokenStream> {
    let named = record.fields.iter().map(|field| {
        let ident = &field.ident;
        match &field.default {
            Some(value) => quote! { #ident: #value },
            None => quote! { #ident: Default::default() },
        }
    });
    let positional = (0..record.positional).map(|index| {
        let index = syn::Index::from(index);
        quote! { #index: Default::default() }
    });
    named.chain(positional).collect()
}

fn emit_setter(record: &Ident, field: &FieldDescriptor) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    let doc = format!(" Sets [`{record}::{}`].", field.name());

    quote! {
        #[doc = #doc]
        pub fn #ident(value: #ty) -> Opt {
            Box::new(move |opts: &mut #record| opts.#ident = value)
        }
    }
}

fn emit_stringifier(record: &Ident, field: &FieldDescriptor) -> Option<TokenStream> {
    let ident = &field.ident;
    let method = format_ident!("{}_str", field.name());
    let doc = format!(" Returns [`{record}::{}`] as a string.", field.name());

    let body = match field.field_type.stringifier()? {
        Scalar::Bool | Scalar::Int64 => quote! { self.#ident.to_string() },
        Scalar::Float64 => quote! { format!("{:.1}", self.#ident) },
        Scalar::String => return None,
    };

    Some(quote! {
        impl #record {
            #[doc = #doc]
            pub fn #method(&self) -> String {
                #body
            }
        }
    })
}

/// Module name for a record: `SampleOpts` becomes `sample_opts`.
pub fn module_ident(record: &Ident) -> Ident {
    let name = to_snake_case(&record.unraw().to_string());
    if syn::parse_str::<Ident>(&name).is_ok() {
        format_ident!("{}", name)
    } else {
        format_ident!("{}_", name)
    }
}

/// Convert PascalCase to snake_case, keeping acronyms together.
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
