// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output dialects and generator selection.
//!
//! This module defines [`Dialect`], the closed set of output styles, and
//! [`select_generator`], which maps a caller-supplied tag to a
//! [`Generator`].

use std::{fmt, str::FromStr};

use crate::{
    error::{GenerateError, Result},
    generator::Generator
};

/// Output dialect.
///
/// All three share one semantic model (guards, operators, connectors) but
/// emit structurally different text.
///
/// # Tags
///
/// Parsing is case-insensitive and accepts the framework names as aliases:
///
/// | Dialect | Accepted tags |
/// |---------|---------------|
/// | `Specification` | `specification`, `jpa`, `criteria` |
/// | `Fluent` | `fluent`, `mybatis-plus`, `mybatis_plus`, `mp` |
/// | `Markup` | `markup`, `mybatis`, `xml` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum Dialect {
    /// Criteria-API `Specification<T>` factory method.
    ///
    /// - Guards: `StringUtils` / `CollectionUtils` / `== null`
    /// - Output: one `public static` method
    Specification,

    /// Lambda query-builder chain.
    ///
    /// - Guards: same as `Specification`, plus per-condition flags
    /// - Output: one service method
    Fluent,

    /// Mapper markup with `<if test>` conditionals.
    ///
    /// - Guards: OGNL test expressions
    /// - Output: one statement element
    Markup
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Self; 3] = [Self::Specification, Self::Fluent, Self::Markup];

    /// Canonical tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Specification => "specification",
            Self::Fluent => "fluent",
            Self::Markup => "markup"
        }
    }

    /// Check whether output is Java source (as opposed to markup).
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Specification | Self::Fluent)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Dialect {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "specification" | "jpa" | "criteria" => Ok(Self::Specification),
            "fluent" | "mybatis-plus" | "mybatis_plus" | "mp" => Ok(Self::Fluent),
            "markup" | "mybatis" | "xml" => Ok(Self::Markup),
            _ => Err(GenerateError::UnsupportedDialect {
                tag: s.to_string()
            })
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = GenerateError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Dialect> for &'static str {
    fn from(dialect: Dialect) -> Self {
        dialect.tag()
    }
}

/// Select the generator for a dialect tag.
///
/// # Errors
///
/// [`GenerateError::UnsupportedDialect`] for any tag outside the supported
/// set. The error is final for the request; retrying the same tag cannot
/// succeed.
///
/// # Examples
///
/// ```
/// use querysmith::{Dialect, select_generator};
///
/// assert_eq!(select_generator("MyBatis").unwrap().dialect(), Dialect::Markup);
/// assert!(select_generator("hibernate").is_err());
/// ```
pub fn select_generator(tag: &str) -> Result<Generator> {
    tag.parse::<Dialect>().map(Generator::from)
}
