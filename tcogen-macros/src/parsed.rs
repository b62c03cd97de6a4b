use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Ident, LitStr, Result};
use tcogen_build::{FieldSet, extract_fields};

pub(crate) struct ParsedComponent {
    name: Ident,
    generics: Generics,
    fields: FieldSet,
}

impl ParsedComponent {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(Error::new_spanned(
                &input.ident,
                "ComponentOpts can only be derived for structs",
            ));
        };

        let fields = extract_fields(&input.ident, &data.fields).map_err(|err| err.into_syn_error())?;

        Ok(Self {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let field_names: Vec<LitStr> = self
            .fields
            .named
            .iter()
            .map(|field| LitStr::new(&field.name(), field.ident.span()))
            .collect();
        let defaults = self.fields.named.iter().filter_map(|field| {
            let value = field.raw_default.as_deref()?;
            let name = field.name();
            Some(quote! { (#name, #value) })
        });

        quote! {
            impl #impl_generics ::tcogen::ComponentOpts for #name #ty_generics #where_clause {
                const FIELDS: &'static [&'static str] = &[#(#field_names),*];
                const DEFAULTS: &'static [(&'static str, &'static str)] = &[#(#defaults),*];
            }
        }
    }
}
