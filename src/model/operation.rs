// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Requested operation kinds.

use std::{fmt, str::FromStr};

use convert_case::{Case, Casing};

use crate::error::GenerateError;

/// The kind of query to generate.
///
/// `SelectPage` behaves like `Select` except that it never emits validation
/// guards: a paginated listing tolerates empty criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperationKind {
    /// Filtered listing with "at least one criterion" validation.
    #[default]
    Select,

    /// Paginated listing without validation guards.
    SelectPage,

    /// Update matching rows.
    Update,

    /// Delete matching rows.
    Delete,

    /// Insert a row.
    Insert
}

impl OperationKind {
    /// Every operation kind.
    pub const ALL: [Self; 5] = [
        Self::Select,
        Self::SelectPage,
        Self::Update,
        Self::Delete,
        Self::Insert
    ];

    /// Snake-case name (e.g., `select_page`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::SelectPage => "select_page",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Insert => "insert"
        }
    }

    /// Name for an embedded method segment (e.g., `SelectPage`).
    #[must_use]
    pub fn pascal_name(&self) -> String {
        self.as_str().to_case(Case::Pascal)
    }

    /// Check whether validation guards are emitted for this kind.
    #[must_use]
    pub const fn requires_guards(&self) -> bool {
        !matches!(self, Self::SelectPage)
    }

    /// Check whether this is `Select` or `SelectPage`.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        matches!(self, Self::Select | Self::SelectPage)
    }

    /// Statement tag for markup output.
    ///
    /// Both select kinds share the `select` tag.
    #[must_use]
    pub const fn statement_tag(&self) -> &'static str {
        match self {
            Self::Select | Self::SelectPage => "select",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Insert => "insert"
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "select_page" | "selectpage" | "select-page" | "page" => Ok(Self::SelectPage),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "insert" => Ok(Self::Insert),
            _ => Err(GenerateError::UnknownOperation {
                value: s.to_string()
            })
        }
    }
}
