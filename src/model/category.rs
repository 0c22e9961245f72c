// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic field categories.
//!
//! Every guard and predicate the generators emit is shaped by the category of
//! the field it touches. The category is a pure function of the declared type
//! name, so it is computed through [`categorize`] everywhere.

use std::fmt;

/// Coarse classification of a field's declared type.
///
/// | Category | Declared type | "Empty" means |
/// |----------|---------------|---------------|
/// | `Text` | exactly `String` | null or `""` |
/// | `Collection` | contains `List`, `Set` or `Collection` | null or no elements |
/// | `Scalar` | anything else | null |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldCategory {
    /// String values.
    Text,

    /// Lists, sets and other collections.
    Collection,

    /// Numbers, dates, booleans, enums and any other single value.
    Scalar
}

impl FieldCategory {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Collection => "collection",
            Self::Scalar => "scalar"
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substrings that mark a declared type as a collection.
const COLLECTION_MARKERS: [&str; 3] = ["List", "Set", "Collection"];

/// Derive the [`FieldCategory`] of a declared type name.
///
/// The match is textual: `"String"` must match exactly, while collection
/// markers may appear anywhere (`List<Long>`, `HashSet<String>`,
/// `Collection<?>`).
///
/// # Examples
///
/// ```
/// use querysmith::{FieldCategory, categorize};
///
/// assert_eq!(categorize("String"), FieldCategory::Text);
/// assert_eq!(categorize("List<Long>"), FieldCategory::Collection);
/// assert_eq!(categorize("LocalDate"), FieldCategory::Scalar);
/// ```
#[must_use]
pub fn categorize(declared_type: &str) -> FieldCategory {
    if declared_type == "String" {
        FieldCategory::Text
    } else if COLLECTION_MARKERS
        .iter()
        .any(|marker| declared_type.contains(marker))
    {
        FieldCategory::Collection
    } else {
        FieldCategory::Scalar
    }
}
