//! Field model extraction for annotated records.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    Attribute, Expr, ExprLit, Fields, Ident, Lit, LitFloat, LitStr, PathArguments, Type, TypePath, UnOp, parse_quote,
};

use crate::error::RecordError;

/// Name of the field attribute carrying tags, as in `#[opts(default = "1")]`.
pub const TAG_ATTRIBUTE: &str = "opts";

/// Tag key whose value seeds the default constructor.
pub const DEFAULT_KEY: &str = "default";

/// Names the emitter already uses inside a record's module.
const RESERVED_NAMES: &[&str] = &["with", "default_opts"];

/// Key/value pairs collected from every `#[opts(...)]` on a field, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: Vec<(String, String)>,
}

impl TagMap {
    /// Parse all `#[opts(key = "value", ...)]` attributes in `attrs`.
    ///
    /// Other attributes are ignored. Every entry must be a plain key bound to
    /// a string literal, and a key may appear only once per field.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut tags = TagMap::default();

        for attr in attrs {
            if !attr.path().is_ident(TAG_ATTRIBUTE) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .ok_or_else(|| meta.error("expected a plain key"))?
                    .to_string();
                let value: LitStr = meta.value()?.parse()?;

                if tags.get(&key).is_some() {
                    return Err(syn::Error::new_spanned(&meta.path, format!("duplicate key `{key}`")));
                }
                tags.entries.push((key, value.value()));
                Ok(())
            })?;
        }

        Ok(tags)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// The fixed set of scalar types the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Bool,
    Int64,
    Float64,
}

impl Scalar {
    fn from_ident(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Scalar::String),
            "bool" => Some(Scalar::Bool),
            "i64" => Some(Scalar::Int64),
            "f64" => Some(Scalar::Float64),
            _ => None,
        }
    }
}

/// How a field's declared type affects generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Exactly one of the known scalars.
    Scalar(Scalar),
    /// Any other bare identifier, such as `u8` or a local `Color`.
    Named(String),
    /// Everything else: generic, qualified, reference, tuple, array types.
    Composite,
}

impl FieldType {
    pub fn classify(ty: &Type) -> Self {
        match bare_ident(ty) {
            Some(name) => Scalar::from_ident(&name).map_or(FieldType::Named(name), FieldType::Scalar),
            None => FieldType::Composite,
        }
    }

    /// The scalar that gets a `<field>_str` method, if any.
    ///
    /// `String` is left out since it is already a string.
    pub fn stringifier(&self) -> Option<Scalar> {
        match self {
            FieldType::Scalar(scalar @ (Scalar::Bool | Scalar::Int64 | Scalar::Float64)) => Some(*scalar),
            _ => None,
        }
    }
}

fn bare_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(TypePath { qself: None, path }) if path.leading_colon.is_none() && path.segments.len() == 1 => {
            let segment = &path.segments[0];
            matches!(segment.arguments, PathArguments::None).then(|| segment.ident.to_string())
        }
        Type::Group(group) => bare_ident(&group.elem),
        _ => None,
    }
}

/// One named field of an annotated record.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub ident: Ident,
    pub ty: Type,
    pub field_type: FieldType,
    /// The `default` tag exactly as written.
    pub raw_default: Option<String>,
    /// Expression injected into the default constructor.
    pub default: Option<Expr>,
}

impl FieldDescriptor {
    /// Field name without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// The fields of one record, split the way the emitter consumes them.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    /// Named fields in declaration order.
    pub named: Vec<FieldDescriptor>,
    /// Number of unnamed (tuple) fields. They have no setters but still need
    /// a value in the default constructor.
    pub positional: usize,
}

/// Extract descriptors for the fields of `record`, in declaration order.
pub fn extract_fields(record: &Ident, fields: &Fields) -> Result<FieldSet, RecordError> {
    let record_name = record.to_string();
    let mut set = FieldSet::default();
    let mut names: HashSet<String> = HashSet::new();

    for field in fields {
        let Some(ident) = &field.ident else {
            set.positional += 1;
            continue;
        };

        let name = ident.unraw().to_string();
        if RESERVED_NAMES.contains(&name.as_str()) || !names.insert(name.clone()) {
            return Err(RecordError::NameCollision {
                record: record_name,
                name,
                span: ident.span(),
            });
        }

        let tags = TagMap::from_attrs(&field.attrs).map_err(|err| RecordError::InvalidTag {
            record: record_name.clone(),
            field: name.clone(),
            message: err.to_string(),
            span: err.span(),
        })?;

        let field_type = FieldType::classify(&field.ty);
        let raw_default = tags.get(DEFAULT_KEY).map(str::to_string);
        let default = match &raw_default {
            Some(raw) => default_literal(&record_name, &name, &field_type, raw, field.ty.span())?,
            None => None,
        };

        set.named.push(FieldDescriptor {
            ident: ident.clone(),
            ty: field.ty.clone(),
            field_type,
            raw_default,
            default,
        });
    }

    Ok(set)
}

/// Turn a raw `default` tag into the expression for the constructor.
///
/// Only `String` fields get quoting. Any other value is emitted as written,
/// so a value of the wrong type surfaces when the generated file is compiled.
/// The one exception is an integer literal on an `f64` field, which gets a
/// fractional part since Rust never coerces `1` to a float.
fn default_literal(
    record: &str,
    field: &str,
    field_type: &FieldType,
    raw: &str,
    span: Span,
) -> Result<Option<Expr>, RecordError> {
    match field_type {
        FieldType::Composite => {
            log::warn!("{record}.{field}: `default` is ignored on composite types");
            Ok(None)
        }
        FieldType::Scalar(Scalar::String) => {
            let literal = LitStr::new(raw, span);
            Ok(Some(parse_quote!(String::from(#literal))))
        }
        FieldType::Scalar(_) | FieldType::Named(_) => {
            let expr = syn::parse_str::<Expr>(raw).map_err(|_| RecordError::InvalidDefault {
                record: record.to_string(),
                field: field.to_string(),
                value: raw.to_string(),
                span,
            })?;
            Ok(Some(match field_type {
                FieldType::Scalar(Scalar::Float64) => widen_int_literal(expr),
                _ => expr,
            }))
        }
    }
}

/// `2` becomes `2.0` and `-3` becomes `-3.0`. Suffixed literals such as
/// `2u8` are left alone.
fn widen_int_literal(expr: Expr) -> Expr {
    match expr {
        Expr::Lit(ExprLit { attrs, lit: Lit::Int(int) }) if int.suffix().is_empty() => {
            let float = LitFloat::new(&format!("{}.0", int.base10_digits()), int.span());
            Expr::Lit(ExprLit { attrs, lit: Lit::Float(float) })
        }
        Expr::Unary(mut unary) if matches!(unary.op, UnOp::Neg(_)) => {
            unary.expr = Box::new(widen_int_literal(*unary.expr));
            Expr::Unary(unary)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    fn fields_of(code: &str) -> Result<FieldSet, RecordError> {
        let item: syn::ItemStruct = syn::parse_str(code).unwrap();
        extract_fields(&item.ident, &item.fields)
    }

    fn render(expr: &Option<Expr>) -> Option<String> {
        expr.as_ref().map(|e| e.to_token_stream().to_string())
    }

    #[test]
    fn test_tag_map_lookup() {
        let field: syn::Field = syn::parse_quote! {
            #[serde(rename = "x")]
            #[opts(default = "true", label = "Happy?")]
            happy: bool
        };
        let tags = TagMap::from_attrs(&field.attrs).unwrap();

        assert_eq!(tags.get("default"), Some("true"));
        assert_eq!(tags.get("label"), Some("Happy?"));
        assert_eq!(tags.get("rename"), None);
        assert_eq!(tags.iter().count(), 2);
    }

    #[test]
    fn test_tag_map_rejects_duplicates_and_flags() {
        let duplicate: syn::Field = syn::parse_quote! {
            #[opts(default = "1")]
            #[opts(default = "2")]
            n: i64
        };
        let flag: syn::Field = syn::parse_quote! {
            #[opts(default)]
            n: i64
        };

        let err = TagMap::from_attrs(&duplicate.attrs).unwrap_err();
        assert_eq!(err.to_string(), "duplicate key `default`");
        assert!(TagMap::from_attrs(&flag.attrs).is_err());
    }

    #[test]
    fn test_classify() {
        let cases: Vec<(Type, FieldType)> = vec![
            (syn::parse_quote!(String), FieldType::Scalar(Scalar::String)),
            (syn::parse_quote!(bool), FieldType::Scalar(Scalar::Bool)),
            (syn::parse_quote!(i64), FieldType::Scalar(Scalar::Int64)),
            (syn::parse_quote!(f64), FieldType::Scalar(Scalar::Float64)),
            (syn::parse_quote!(u8), FieldType::Named("u8".into())),
            (syn::parse_quote!(Color), FieldType::Named("Color".into())),
            (syn::parse_quote!(std::string::String), FieldType::Composite),
            (syn::parse_quote!(Option<i64>), FieldType::Composite),
            (syn::parse_quote!(&'static str), FieldType::Composite),
        ];

        for (ty, expected) in cases {
            assert_eq!(FieldType::classify(&ty), expected, "{}", ty.to_token_stream());
        }
    }

    #[test]
    fn test_only_bool_i64_f64_are_stringified() {
        assert_eq!(FieldType::Scalar(Scalar::Bool).stringifier(), Some(Scalar::Bool));
        assert_eq!(FieldType::Scalar(Scalar::Int64).stringifier(), Some(Scalar::Int64));
        assert_eq!(FieldType::Scalar(Scalar::Float64).stringifier(), Some(Scalar::Float64));
        assert_eq!(FieldType::Scalar(Scalar::String).stringifier(), None);
        assert_eq!(FieldType::Named("i32".into()).stringifier(), None);
        assert_eq!(FieldType::Composite.stringifier(), None);
    }

    #[test]
    fn test_extract_sample_fields() {
        let set = fields_of(
            r#"
            pub struct Sample {
                pub name: String,
                pub age: i64,
                #[opts(default = "true")]
                pub happy: bool,
            }
            "#,
        )
        .unwrap();

        let names: Vec<_> = set.named.iter().map(FieldDescriptor::name).collect();
        assert_eq!(names, vec!["name", "age", "happy"]);
        assert_eq!(set.positional, 0);
        assert_eq!(render(&set.named[0].default), None);
        assert_eq!(render(&set.named[2].default), Some("true".to_string()));
        assert_eq!(set.named[1].raw_default, None);
        assert_eq!(set.named[2].raw_default.as_deref(), Some("true"));
    }

    #[test]
    fn test_string_defaults_are_quoted() {
        let set = fields_of(
            r#"
            struct Greeting {
                #[opts(default = "hello \"world\"")]
                text: String,
            }
            "#,
        )
        .unwrap();

        let expected: Expr = syn::parse_quote!(String::from("hello \"world\""));
        assert_eq!(set.named[0].default.as_ref(), Some(&expected));
    }

    #[test]
    fn test_non_string_defaults_are_emitted_raw() {
        let set = fields_of(
            r#"
            struct Numbers {
                #[opts(default = "-42")]
                count: i64,
                #[opts(default = "1.5")]
                ratio: f64,
                #[opts(default = "Color::Red")]
                color: Color,
                #[opts(default = "abc")]
                wrong: i64,
            }
            "#,
        )
        .unwrap();

        let defaults: Vec<_> = set.named.iter().map(|f| render(&f.default).unwrap()).collect();
        assert_eq!(defaults, vec!["- 42", "1.5", "Color :: Red", "abc"]);
    }

    #[test]
    fn test_integer_float_defaults_get_a_fraction() {
        let set = fields_of(
            r#"
            struct Weights {
                #[opts(default = "1")]
                whole: f64,
                #[opts(default = "-3")]
                negative: f64,
                #[opts(default = "0x10")]
                hex: f64,
                #[opts(default = "2f64")]
                suffixed: f64,
                #[opts(default = "7")]
                count: i64,
            }
            "#,
        )
        .unwrap();

        let defaults: Vec<_> = set.named.iter().map(|f| render(&f.default).unwrap()).collect();
        assert_eq!(defaults, vec!["1.0", "- 3.0", "16.0", "2f64", "7"]);
        assert_eq!(set.named[0].raw_default.as_deref(), Some("1"));
    }

    #[test]
    fn test_composite_defaults_are_ignored() {
        let set = fields_of(
            r#"
            struct Tags {
                #[opts(default = "vec![]")]
                tags: Vec<String>,
            }
            "#,
        )
        .unwrap();

        assert!(set.named[0].default.is_none());
        assert_eq!(set.named[0].field_type, FieldType::Composite);
    }

    #[test]
    fn test_unparseable_default_is_an_error() {
        let err = fields_of(
            r#"
            struct Broken {
                #[opts(default = "1 +")]
                n: i64,
            }
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, RecordError::InvalidDefault { ref field, .. } if field == "n"));
    }

    #[test]
    fn test_tuple_fields_are_counted_not_described() {
        let set = fields_of("struct Pair(#[opts(default = \"1\")] i64, String);").unwrap();

        assert!(set.named.is_empty());
        assert_eq!(set.positional, 2);
    }

    #[test]
    fn test_reserved_field_name_collides() {
        let err = fields_of("struct Bad { with: bool }").unwrap_err();

        assert!(matches!(err, RecordError::NameCollision { ref name, .. } if name == "with"));
    }

    #[test]
    fn test_raw_identifier_is_normalized() {
        let set = fields_of("struct Kind { r#type: String }").unwrap();

        assert_eq!(set.named[0].name(), "type");
        assert_eq!(set.named[0].ident.to_string(), "r#type");
    }

    #[test]
    fn test_invalid_tag_names_the_field() {
        let err = fields_of(
            r#"
            struct Bad {
                #[opts(default = 5)]
                n: i64,
            }
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Bad.n"), "{err}");
    }
}
