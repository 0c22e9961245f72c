// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Level | Default | Description |
//! |-----------|-------|---------|-------------|
//! | `name` | struct | struct name | Entity name |
//! | `qualified` | struct | `module_path!()::name` | Qualified entity name |
//! | `rename_all` | struct | `camelCase` | Field name rule |
//! | `skip` | field | `false` | Leave the field out |
//! | `rename` | field | per `rename_all` | Field name, used as is |
//! | `type_name` | field | mapped from the Rust type | Declared type, used as is |

mod rename;

use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use syn::{Data as InputData, DeriveInput, Fields, Generics, Ident, Type, ext::IdentExt};

pub use self::rename::RenameRule;
use super::type_name::declared_type;

/// Parsed `#[derive(Describe)]` input.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(describe), supports(struct_named))]
pub struct DescribeDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the impl.
    pub generics: Generics,

    /// Named fields.
    pub data: Data<Ignored, FieldAttrs>,

    /// Entity name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Qualified name override.
    #[darling(default)]
    pub qualified: Option<String>,

    /// Rule applied to field names without `rename`.
    #[darling(default)]
    pub rename_all: RenameRule
}

impl DescribeDef {
    /// Parse derive input, rejecting anything but a struct with named
    /// fields.
    ///
    /// # Errors
    ///
    /// Enums, unions, tuple and unit structs are spanned on the type name.
    pub fn parse(input: &DeriveInput) -> darling::Result<Self> {
        match &input.data {
            InputData::Struct(data) if matches!(data.fields, Fields::Named(_)) => {}
            InputData::Struct(_) => {
                return Err(darling::Error::custom("Describe requires named fields")
                    .with_span(&input.ident));
            }
            _ => {
                return Err(
                    darling::Error::custom("Describe can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        }
        Self::from_derive_input(input)
    }

    /// Entity name: `name` if given, else the struct name.
    pub fn entity_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }

    /// Fields that are not skipped, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldAttrs> {
        self.data
            .as_ref()
            .take_struct()
            .into_iter()
            .flat_map(|fields| fields.fields)
            .filter(|field| !field.skip)
    }
}

/// Field-level `#[describe(...)]`.
#[derive(Debug, FromField)]
#[darling(attributes(describe))]
pub struct FieldAttrs {
    pub ident:     Option<Ident>,
    pub ty:        Type,
    #[darling(default)]
    pub skip:      bool,
    #[darling(default)]
    pub rename:    Option<String>,
    #[darling(default)]
    pub type_name: Option<String>
}

impl FieldAttrs {
    /// Field name as it appears in the descriptor.
    pub fn field_name(&self, rule: RenameRule) -> String {
        if let Some(rename) = &self.rename {
            return rename.clone();
        }
        let ident = self
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .unwrap_or_default();
        rule.apply(&ident)
    }

    /// Declared type name: `type_name` if given, else mapped from the Rust
    /// type.
    ///
    /// # Errors
    ///
    /// Types with no mapping (function pointers, tuples, trait objects)
    /// need an explicit `type_name`.
    pub fn declared_type(&self) -> darling::Result<String> {
        if let Some(type_name) = &self.type_name {
            return Ok(type_name.clone());
        }
        declared_type(&self.ty).ok_or_else(|| {
            darling::Error::custom(
                "cannot map this type to a declared type name; add #[describe(type_name = \"...\")]"
            )
            .with_span(&self.ty)
        })
    }
}
