//! Code generation for `#[derive(Record)]`.
//!
//! Produces an `impl sift::Record` with one match arm per exposed field,
//! plus an associated `&'static str` constant per exposed name so search,
//! filter and sort setup can refer to fields without string literals.

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Field, Fields, Ident, Result};

use crate::attrs::{parse_record_attrs, FieldKind};

/// A struct field that `field_value` can return.
struct Exposed<'a> {
    ident: &'a Ident,
    name: String,
    kind: FieldKind,
    span: Span,
}

impl Exposed<'_> {
    fn value_expr(&self) -> TokenStream {
        let ident = self.ident;
        match self.kind {
            FieldKind::Text => quote! {
                ::sift::Value::String(::core::convert::AsRef::<str>::as_ref(&self.#ident))
            },
            FieldKind::Number => quote! {
                ::sift::Value::Number(::sift::Number::from(self.#ident))
            },
            FieldKind::Bool => quote! {
                ::sift::Value::Bool(self.#ident)
            },
        }
    }

    fn constant(&self) -> TokenStream {
        let const_ident = format_ident!("{}", constant_name(&self.name), span = self.span);
        let name = &self.name;
        quote! {
            #[doc = concat!("Name of the `", #name, "` record field.")]
            pub const #const_ident: &'static str = #name;
        }
    }
}

pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let exposed = exposed_fields(&input)?;

    let ty = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let names = exposed.iter().map(|f| &f.name);
    let values = exposed.iter().map(Exposed::value_expr);
    let constants = exposed.iter().map(Exposed::constant);

    Ok(quote! {
        impl #impl_generics #ty #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::sift::Record for #ty #ty_generics #where_clause {
            fn field_value(&self, field: &str) -> ::sift::Value<'_> {
                match field {
                    #(#names => #values,)*
                    _ => ::sift::Value::None,
                }
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> Result<impl Iterator<Item = &Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named.named.iter()),
            other => Err(Error::new(
                other.span(),
                "#[derive(Record)] needs named fields to expose by name",
            )),
        },
        Data::Enum(data) => Err(Error::new(
            data.enum_token.span(),
            "#[derive(Record)] is only supported on structs, not enums",
        )),
        Data::Union(data) => Err(Error::new(
            data.union_token.span(),
            "#[derive(Record)] is only supported on structs, not unions",
        )),
    }
}

// Only fields with a kind and no `skip` are exposed.
fn exposed_fields(input: &DeriveInput) -> Result<Vec<Exposed<'_>>> {
    let mut exposed = Vec::new();
    let mut seen: HashMap<String, Span> = HashMap::new();

    for field in named_fields(input)? {
        let attr = parse_record_attrs(&field.attrs)?;
        let (Some(kind), false) = (attr.kind, attr.skip) else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let name = attr.rename.unwrap_or_else(|| ident.to_string());
        let span = field.span();
        if let Some(first) = seen.insert(name.clone(), span) {
            let mut err = Error::new(span, format!("record field name `{name}` is exposed twice"));
            err.combine(Error::new(first, "first exposed here"));
            return Err(err);
        }

        exposed.push(Exposed { ident, name, kind, span });
    }

    Ok(exposed)
}

/// `lastSeen` → `LAST_SEEN`, `erase-method` → `ERASE_METHOD`.
fn constant_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut at_word_end = false;

    for c in name.chars() {
        if c == '_' || c == '-' {
            out.push('_');
            at_word_end = false;
            continue;
        }
        if c.is_uppercase() && at_word_end {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        at_word_end = c.is_lowercase() || c.is_ascii_digit();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("name"), "NAME");
        assert_eq!(constant_name("serial_number"), "SERIAL_NUMBER");
        assert_eq!(constant_name("lastSeen"), "LAST_SEEN");
        assert_eq!(constant_name("erase-method"), "ERASE_METHOD");
        assert_eq!(constant_name("disk2Size"), "DISK2_SIZE");
    }

    #[test]
    fn rejects_non_structs() {
        let tuple: DeriveInput = parse_quote! { struct Pair(String, u32); };
        let err = record_derive_impl(tuple).unwrap_err();
        assert!(err.to_string().contains("named fields"));

        let status: DeriveInput = parse_quote! { enum Status { Online, Offline } };
        let err = record_derive_impl(status).unwrap_err();
        assert!(err.to_string().contains("not enums"));
    }

    #[test]
    fn rejects_duplicate_exposed_names() {
        let input: DeriveInput = parse_quote! {
            struct Device {
                #[record(text)]
                label: String,
                #[record(text, rename = "label")]
                hostname: String,
            }
        };
        let err = record_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("exposed twice"));
    }

    #[test]
    fn only_annotated_fields_are_generated() {
        let input: DeriveInput = parse_quote! {
            struct Device {
                #[record(text)]
                hostname: String,
                #[record(number, rename = "port_number")]
                port: u16,
                #[record(skip)]
                secret: String,
                notes: String,
            }
        };
        let tokens = record_derive_impl(input).unwrap().to_string();

        assert!(tokens.contains("HOSTNAME"));
        assert!(tokens.contains("PORT_NUMBER"));
        assert!(tokens.contains("\"port_number\""));
        assert!(!tokens.contains("SECRET"));
        assert!(!tokens.contains("NOTES"));
    }
}
