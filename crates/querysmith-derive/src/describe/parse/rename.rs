// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field name rules for `rename_all`.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// How Rust field names turn into descriptor field names.
///
/// # Examples
///
/// ```rust,ignore
/// #[describe(rename_all = "camelCase")]   // user_name -> userName
/// #[describe(rename_all = "snake_case")]  // userName -> user_name
/// #[describe(rename_all = "PascalCase")]  // user_name -> UserName
/// #[describe(rename_all = "verbatim")]    // user_name -> user_name
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    /// Java bean property style.
    #[default]
    Camel,

    /// Column style.
    Snake,

    /// Type style.
    Pascal,

    /// Keep the Rust name.
    Verbatim
}

impl RenameRule {
    /// Apply the rule to a field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Snake => name.to_case(Case::Snake),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Verbatim => name.to_string()
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "camelcase" | "camel" => Ok(Self::Camel),
            "snake_case" | "snake" => Ok(Self::Snake),
            "pascalcase" | "pascal" => Ok(Self::Pascal),
            "verbatim" | "none" => Ok(Self::Verbatim),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_camel() {
        assert_eq!(RenameRule::default(), RenameRule::Camel);
    }

    #[test]
    fn from_meta_valid() {
        assert_eq!(RenameRule::from_string("camelCase").unwrap(), RenameRule::Camel);
        assert_eq!(RenameRule::from_string("snake_case").unwrap(), RenameRule::Snake);
        assert_eq!(RenameRule::from_string("PascalCase").unwrap(), RenameRule::Pascal);
        assert_eq!(RenameRule::from_string("verbatim").unwrap(), RenameRule::Verbatim);
    }

    #[test]
    fn from_meta_invalid() {
        assert!(RenameRule::from_string("kebab-case").is_err());
    }

    #[test]
    fn apply() {
        assert_eq!(RenameRule::Camel.apply("tag_ids"), "tagIds");
        assert_eq!(RenameRule::Snake.apply("userName"), "user_name");
        assert_eq!(RenameRule::Pascal.apply("user_name"), "UserName");
        assert_eq!(RenameRule::Verbatim.apply("user_name"), "user_name");
        assert_eq!(RenameRule::Camel.apply("id"), "id");
    }
}
