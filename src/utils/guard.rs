// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Emptiness guards.
//!
//! Every dialect needs the same question answered about a field ("is it
//! missing?" or "is it present?"), and the answer depends only on the field's
//! [`FieldCategory`]. [`emptiness_guard`] owns that decision; a
//! [`GuardSyntax`] only decides how each check is spelled.
//!
//! | Category | Missing | Present |
//! |----------|---------|---------|
//! | `Text` | null or empty string | non-null, non-empty |
//! | `Collection` | null or no elements | non-null, has elements |
//! | `Scalar` | null | non-null |

use crate::model::FieldCategory;

/// Which side of the emptiness check a guard tests for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The guard holds when the field has no usable value.
    Missing,

    /// The guard holds when the field has a usable value.
    Present
}

/// Spelling of the three emptiness checks in one output dialect.
///
/// `access` is the dialect's expression for reading the field
/// (`entity.getName()` in code, `name` in markup tests).
pub trait GuardSyntax {
    /// Empty-string check.
    fn text(&self, access: &str, presence: Presence) -> String;

    /// Empty-collection check.
    fn collection(&self, access: &str, presence: Presence) -> String;

    /// Null check.
    fn scalar(&self, access: &str, presence: Presence) -> String;
}

/// Render the emptiness check for a field of `category`.
///
/// # Examples
///
/// ```
/// use querysmith::{
///     FieldCategory,
///     utils::{JavaGuards, OgnlGuards, Presence, emptiness_guard}
/// };
///
/// assert_eq!(
///     emptiness_guard(&JavaGuards, "entity.getName()", FieldCategory::Text, Presence::Missing),
///     "StringUtils.isEmpty(entity.getName())"
/// );
/// assert_eq!(
///     emptiness_guard(&OgnlGuards, "age", FieldCategory::Scalar, Presence::Present),
///     "age != null"
/// );
/// ```
#[must_use]
pub fn emptiness_guard<S: GuardSyntax + ?Sized>(
    syntax: &S,
    access: &str,
    category: FieldCategory,
    presence: Presence
) -> String {
    match category {
        FieldCategory::Text => syntax.text(access, presence),
        FieldCategory::Collection => syntax.collection(access, presence),
        FieldCategory::Scalar => syntax.scalar(access, presence)
    }
}

/// Guards for generated Java, using commons-lang `StringUtils` and Spring
/// `CollectionUtils`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaGuards;

impl GuardSyntax for JavaGuards {
    fn text(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("StringUtils.isEmpty({access})"),
            Presence::Present => format!("StringUtils.isNotEmpty({access})")
        }
    }

    fn collection(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("CollectionUtils.isEmpty({access})"),
            Presence::Present => format!("CollectionUtils.isNotEmpty({access})")
        }
    }

    fn scalar(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("{access} == null"),
            Presence::Present => format!("{access} != null")
        }
    }
}

/// Guards for the `test` attribute of markup conditionals (OGNL expressions).
#[derive(Debug, Clone, Copy, Default)]
pub struct OgnlGuards;

impl GuardSyntax for OgnlGuards {
    fn text(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("{access} == null or {access} == ''"),
            Presence::Present => format!("{access} != null and {access} != ''")
        }
    }

    fn collection(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("{access} == null or {access}.isEmpty()"),
            Presence::Present => format!("{access} != null and !{access}.isEmpty()")
        }
    }

    fn scalar(&self, access: &str, presence: Presence) -> String {
        match presence {
            Presence::Missing => format!("{access} == null"),
            Presence::Present => format!("{access} != null")
        }
    }
}
