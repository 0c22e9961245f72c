// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Comparison operators.

use std::{fmt, str::FromStr};

use super::category::FieldCategory;
use crate::error::GenerateError;

/// Comparison applied between a target column and a source field value.
///
/// Each operator has a display symbol, which is also the form accepted by
/// [`FromStr`]. `like` and `in` parse case-insensitively.
///
/// | Operator | Symbol | Valid for |
/// |----------|--------|-----------|
/// | `Eq` | `=` | any field |
/// | `Ne` | `!=` | any field |
/// | `Lt` | `<` | any field |
/// | `Le` | `<=` | any field |
/// | `Gt` | `>` | any field |
/// | `Ge` | `>=` | any field |
/// | `Like` | `like` | text fields only |
/// | `In` | `in` | collection fields only |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionOperator {
    /// Equality.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Eq,

    /// Inequality.
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    Ne,

    /// Strictly less than.
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    Lt,

    /// Less than or equal.
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    Le,

    /// Strictly greater than.
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    Gt,

    /// Greater than or equal.
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    Ge,

    /// Substring match; the value is wrapped in `%` wildcards.
    #[cfg_attr(feature = "serde", serde(rename = "like", alias = "LIKE"))]
    Like,

    /// Membership in the field's collection value.
    #[cfg_attr(feature = "serde", serde(rename = "in", alias = "IN"))]
    In
}

impl ConditionOperator {
    /// Every operator, in display order.
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Le,
        Self::Gt,
        Self::Ge,
        Self::Like,
        Self::In
    ];

    /// Display symbol (e.g., `>=`, `like`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "like",
            Self::In => "in"
        }
    }

    /// Check whether this operator may be applied to a field of `category`.
    ///
    /// `Like` needs text, `In` needs a collection; the six ordering and
    /// equality operators accept anything.
    #[must_use]
    pub const fn accepts(&self, category: FieldCategory) -> bool {
        match self {
            Self::Like => matches!(category, FieldCategory::Text),
            Self::In => matches!(category, FieldCategory::Collection),
            _ => true
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ConditionOperator {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| GenerateError::UnknownOperator {
                symbol: s.to_string()
            })
    }
}
