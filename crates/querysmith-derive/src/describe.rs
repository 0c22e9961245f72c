// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Describe derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! describe.rs (orchestrator)
//! │
//! ├── parse/         → #[describe(...)] parsing (DescribeDef, FieldAttrs, RenameRule)
//! └── type_name.rs   → Rust type → declared type name
//! ```
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::querysmith::Describe for UserQuery {
//!     fn descriptor() -> ::querysmith::EntityDescriptor {
//!         ::querysmith::EntityDescriptor::new("UserQuery", "com.acme.UserQuery")
//!             .with_field("userName", "String")
//!             .with_field("tagIds", "List<Long>")
//!     }
//! }
//! ```

mod parse;
mod type_name;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::DescribeDef;

/// Main entry point for the Describe derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match DescribeDef::parse(&input).and_then(|def| generate(&def)) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(def: &DescribeDef) -> darling::Result<TokenStream2> {
    let ident = &def.ident;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();
    let name = def.entity_name();
    let qualified = match &def.qualified {
        Some(qualified) => quote! { #qualified },
        None => quote! { concat!(module_path!(), "::", #name) }
    };

    let mut errors = darling::Error::accumulator();
    let fields: Vec<TokenStream2> = def
        .fields()
        .filter_map(|field| {
            let declared = errors.handle(field.declared_type())?;
            let field_name = field.field_name(def.rename_all);
            Some(quote! { .with_field(#field_name, #declared) })
        })
        .collect();
    errors.finish()?;

    Ok(quote! {
        impl #impl_generics ::querysmith::Describe for #ident #ty_generics #where_clause {
            fn descriptor() -> ::querysmith::EntityDescriptor {
                ::querysmith::EntityDescriptor::new(#name, #qualified)
                    #(#fields)*
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(input: DeriveInput) -> darling::Result<String> {
        let def = DescribeDef::parse(&input)?;
        generate(&def).map(|tokens| tokens.to_string())
    }

    #[test]
    fn expands_fields_in_order() {
        let output = expand(syn::parse_quote! {
            #[describe(qualified = "com.acme.User")]
            struct User {
                id: i64,
                user_name: Option<String>,
                #[describe(skip)]
                secret: String,
                roles: Vec<String>,
            }
        })
        .unwrap();

        assert!(output.contains("impl :: querysmith :: Describe for User"));
        assert!(output.contains("EntityDescriptor :: new (\"User\" , \"com.acme.User\")"));
        let id = output.find("with_field (\"id\" , \"Long\")").unwrap();
        let name = output.find("with_field (\"userName\" , \"String\")").unwrap();
        let roles = output.find("with_field (\"roles\" , \"List<String>\")").unwrap();
        assert!(id < name && name < roles);
        assert!(!output.contains("secret"));
    }

    #[test]
    fn default_qualified_name_is_module_path() {
        let output = expand(syn::parse_quote! {
            struct Tag { label: String }
        })
        .unwrap();
        assert!(output.contains("module_path !"));
        assert!(output.contains("\"Tag\""));
    }

    #[test]
    fn generics_are_forwarded() {
        let output = expand(syn::parse_quote! {
            struct Page<T: Clone> { items: Vec<T> }
        })
        .unwrap();
        assert!(output.contains("impl < T : Clone >"));
        assert!(output.contains("Describe for Page < T >"));
        assert!(output.contains("\"List<T>\""));
    }

    #[test]
    fn unsupported_field_type_is_an_error() {
        let err = expand(syn::parse_quote! {
            struct Callback { handler: fn(i32) -> i32 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("type_name"));
    }

    #[test]
    fn explicit_type_name_covers_unsupported_types() {
        let output = expand(syn::parse_quote! {
            struct Callback {
                #[describe(type_name = "Function")]
                handler: fn(i32) -> i32
            }
        })
        .unwrap();
        assert!(output.contains("with_field (\"handler\" , \"Function\")"));
    }

    #[test]
    fn enums_are_rejected() {
        let result = expand(syn::parse_quote! {
            enum Status { Active, Disabled }
        });
        assert_eq!(
            result.unwrap_err().to_string(),
            "Describe can only be derived for structs"
        );
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let result = expand(syn::parse_quote! {
            struct Id(i64);
        });
        assert_eq!(result.unwrap_err().to_string(), "Describe requires named fields");
    }
}
