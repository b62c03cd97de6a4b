//! Minimal `use` list for a generated module.
//!
//! Generated code lives in a child module of the record's module, so every
//! name it mentions must be brought in from `super`. Only the records and the
//! names their field types actually reference are imported.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::visit::{self, Visit};
use syn::{Item, UseTree};

use crate::scanner::{AnnotatedRecord, SourceFile};

/// Names available everywhere without an import.
const PRELUDE: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "String", "Vec", "Option", "Result", "Box", "ToString", "ToOwned", "Default", "Clone", "Copy",
    "Send", "Sync", "Sized", "Fn", "FnMut", "FnOnce", "Iterator", "IntoIterator", "Self", "self", "super", "crate",
    "std", "core", "alloc",
];

/// The ordered set of names imported from the parent module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    records: Vec<String>,
    referenced: BTreeSet<String>,
}

impl ImportSet {
    /// Compute the imports needed by the modules generated for `records`.
    pub fn for_records(source: &SourceFile, records: &[AnnotatedRecord]) -> Self {
        let bound = bound_names(&source.syntax.items);
        let mut collector = PathHeads::default();
        for field in records.iter().flat_map(|record| &record.fields) {
            collector.visit_type(&field.ty);
        }

        let records: Vec<String> = records.iter().map(AnnotatedRecord::name).collect();
        let referenced = collector
            .singles
            .into_iter()
            .filter(|name| !PRELUDE.contains(&name.as_str()))
            .chain(collector.heads.into_iter().filter(|name| bound.contains(name)))
            .filter(|name| !records.contains(name))
            .collect();

        Self { records, referenced }
    }

    /// Every imported name: records first in source order, then referenced names sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .chain(self.referenced.iter())
            .map(String::as_str)
    }

    pub fn to_tokens(&self) -> TokenStream {
        let idents: Vec<_> = self.names().map(|name| format_ident!("{}", name)).collect();
        match idents.as_slice() {
            [] => TokenStream::new(),
            [single] => quote! { use super::#single; },
            many => quote! { use super::{#(#many),*}; },
        }
    }
}

/// First segments of relative paths found in a type, including the
/// expressions inside array lengths and const generic arguments.
#[derive(Default)]
struct PathHeads {
    /// Single-segment paths such as `Color` or `SystemTime`.
    singles: BTreeSet<String>,
    /// Leading segments of longer paths such as `chrono` in `chrono::Utc`.
    heads: BTreeSet<String>,
}

impl PathHeads {
    fn record(&mut self, path: &syn::Path) {
        if path.leading_colon.is_some() {
            return;
        }
        if let Some(first) = path.segments.first() {
            let name = first.ident.to_string();
            if path.segments.len() == 1 {
                self.singles.insert(name);
            } else {
                self.heads.insert(name);
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathHeads {
    fn visit_type_path(&mut self, node: &'ast syn::TypePath) {
        if node.qself.is_none() {
            self.record(&node.path);
        }
        visit::visit_type_path(self, node);
    }

    fn visit_expr_path(&mut self, node: &'ast syn::ExprPath) {
        if node.qself.is_none() {
            self.record(&node.path);
        }
        visit::visit_expr_path(self, node);
    }

    fn visit_trait_bound(&mut self, node: &'ast syn::TraitBound) {
        self.record(&node.path);
        visit::visit_trait_bound(self, node);
    }
}

/// Names a file binds at its top level through items and `use` declarations.
fn bound_names(items: &[Item]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for item in items {
        let ident = match item {
            Item::Use(item_use) => {
                collect_use_names(&item_use.tree, None, &mut names);
                continue;
            }
            Item::Mod(item) => &item.ident,
            Item::Struct(item) => &item.ident,
            Item::Enum(item) => &item.ident,
            Item::Union(item) => &item.ident,
            Item::Type(item) => &item.ident,
            Item::Trait(item) => &item.ident,
            Item::ExternCrate(item) => item.rename.as_ref().map_or(&item.ident, |(_, rename)| rename),
            _ => continue,
        };
        names.insert(ident.to_string());
    }
    names
}

fn collect_use_names(tree: &UseTree, parent: Option<&syn::Ident>, names: &mut BTreeSet<String>) {
    match tree {
        UseTree::Path(path) => collect_use_names(&path.tree, Some(&path.ident), names),
        UseTree::Name(name) if name.ident == "self" => {
            if let Some(parent) = parent {
                names.insert(parent.to_string());
            }
        }
        UseTree::Name(name) => {
            names.insert(name.ident.to_string());
        }
        UseTree::Rename(rename) => {
            names.insert(rename.rename.to_string());
        }
        UseTree::Group(group) => {
            for tree in &group.items {
                collect_use_names(tree, parent, names);
            }
        }
        UseTree::Glob(_) => {}
    }
}
