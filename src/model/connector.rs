// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Logical connectors between selected fields.

use std::{fmt, str::FromStr};

use crate::error::GenerateError;

/// How a field's predicate joins the predicates before it.
///
/// Only meaningful from the second selected field on; the first field's
/// connector is ignored by the code dialects. The markup dialect still prints
/// it, because its `<where>` tag strips a leading `AND`/`OR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LogicalConnector {
    /// Conjunction (the default join).
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "and"))]
    And,

    /// Disjunction.
    #[cfg_attr(feature = "serde", serde(alias = "or"))]
    Or
}

impl LogicalConnector {
    /// SQL keyword (`AND` / `OR`).
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR"
        }
    }
}

impl fmt::Display for LogicalConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for LogicalConnector {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(GenerateError::UnknownConnector {
                value: s.to_string()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!("and".parse::<LogicalConnector>().unwrap(), LogicalConnector::And);
        assert_eq!("OR".parse::<LogicalConnector>().unwrap(), LogicalConnector::Or);
        assert!("xor".parse::<LogicalConnector>().is_err());
    }

    #[test]
    fn keywords_are_uppercase() {
        assert_eq!(LogicalConnector::And.to_string(), "AND");
        assert_eq!(LogicalConnector::Or.to_string(), "OR");
    }
}
