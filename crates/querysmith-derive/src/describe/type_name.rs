// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type → declared type name.
//!
//! Declared names are what the generators categorize on, so the mapping keeps
//! the Java spelling of text and collection types.
//!
//! | Rust | Declared |
//! |------|----------|
//! | `String`, `&str` | `String` |
//! | `Option<T>`, `Box<T>` | declared name of `T` |
//! | `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `[T]`, `[T; N]` | `List<T>` |
//! | `HashSet<T>`, `BTreeSet<T>` | `Set<T>` |
//! | `i32`, `u32` | `Integer` |
//! | `i64`, `u64`, `isize`, `usize` | `Long` |
//! | `Foo<A, B>` | `Foo<A, B>` (arguments mapped) |

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Map a Rust type, or `None` when it has no declared spelling.
pub fn declared_type(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path_type(path),
        Type::Reference(reference) => declared_type(&reference.elem),
        Type::Paren(paren) => declared_type(&paren.elem),
        Type::Group(group) => declared_type(&group.elem),
        Type::Slice(slice) => Some(format!("List<{}>", declared_type(&slice.elem)?)),
        Type::Array(array) => Some(format!("List<{}>", declared_type(&array.elem)?)),
        _ => None
    }
}

fn path_type(path: &TypePath) -> Option<String> {
    let segment = path.path.segments.last()?;
    let ident = segment.ident.to_string();
    let args = match &segment.arguments {
        PathArguments::None => Vec::new(),
        PathArguments::AngleBracketed(generic) => generic
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(declared_type(ty)),
                _ => None
            })
            .collect::<Option<Vec<_>>>()?,
        PathArguments::Parenthesized(_) => return None
    };

    let declared = match (ident.as_str(), args.as_slice()) {
        ("Option" | "Box", [inner]) => inner.clone(),
        ("Vec" | "VecDeque" | "LinkedList", [inner]) => format!("List<{inner}>"),
        ("HashSet" | "BTreeSet", [inner]) => format!("Set<{inner}>"),
        (name, []) => boxed_primitive(name).unwrap_or(name).to_string(),
        (name, args) => format!("{name}<{}>", args.join(", "))
    };
    Some(declared)
}

fn boxed_primitive(name: &str) -> Option<&'static str> {
    let boxed = match name {
        "str" | "String" => "String",
        "bool" => "Boolean",
        "i8" | "u8" => "Byte",
        "i16" | "u16" => "Short",
        "i32" | "u32" => "Integer",
        "i64" | "u64" | "isize" | "usize" => "Long",
        "f32" => "Float",
        "f64" => "Double",
        "char" => "Character",
        _ => return None
    };
    Some(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(ty: Type) -> Option<String> {
        declared_type(&ty)
    }

    #[test]
    fn text() {
        assert_eq!(map(syn::parse_quote!(String)).unwrap(), "String");
        assert_eq!(map(syn::parse_quote!(&'a str)).unwrap(), "String");
        assert_eq!(map(syn::parse_quote!(std::string::String)).unwrap(), "String");
    }

    #[test]
    fn wrappers_unwrap() {
        assert_eq!(map(syn::parse_quote!(Option<String>)).unwrap(), "String");
        assert_eq!(map(syn::parse_quote!(Option<Box<i64>>)).unwrap(), "Long");
    }

    #[test]
    fn collections() {
        assert_eq!(map(syn::parse_quote!(Vec<i64>)).unwrap(), "List<Long>");
        assert_eq!(map(syn::parse_quote!(Option<VecDeque<String>>)).unwrap(), "List<String>");
        assert_eq!(
            map(syn::parse_quote!(std::collections::HashSet<u32>)).unwrap(),
            "Set<Integer>"
        );
        assert_eq!(map(syn::parse_quote!(&[u8])).unwrap(), "List<Byte>");
        assert_eq!(map(syn::parse_quote!([f32; 3])).unwrap(), "List<Float>");
    }

    #[test]
    fn other_paths_keep_last_segment() {
        assert_eq!(map(syn::parse_quote!(chrono::NaiveDate)).unwrap(), "NaiveDate");
        assert_eq!(
            map(syn::parse_quote!(HashMap<String, Vec<bool>>)).unwrap(),
            "HashMap<String, List<Boolean>>"
        );
    }

    #[test]
    fn unmappable_types() {
        assert_eq!(map(syn::parse_quote!(fn(i32) -> i32)), None);
        assert_eq!(map(syn::parse_quote!((i32, i32))), None);
        assert_eq!(map(syn::parse_quote!(())), None);
        assert_eq!(map(syn::parse_quote!(Box<dyn Fn()>)), None);
    }
}
