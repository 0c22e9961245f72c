// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Selected fields with their comparison settings.

use super::{
    category::FieldCategory, connector::LogicalConnector, entity::FieldDef,
    operator::ConditionOperator
};
use crate::error::{GenerateError, Result};

/// One field picked for the query, with how it should be compared.
///
/// # Example
///
/// ```
/// use querysmith::{ConditionOperator, FieldDef, FieldSelection, LogicalConnector};
///
/// let city = FieldSelection::new(FieldDef::new("city", "String"), ConditionOperator::Like)
///     .with_connector(LogicalConnector::Or)
///     .with_target_column("cityName");
///
/// assert_eq!(city.column(), "cityName");
/// assert!(city.check_operator().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSelection {
    /// The source field supplying the value.
    pub field: FieldDef,

    /// Comparison between column and value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub operator: ConditionOperator,

    /// Join with the previous selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub connector: LogicalConnector,

    /// Field name on the target entity this selection maps to.
    ///
    /// Empty means "same name as the source field".
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_column: String
}

impl FieldSelection {
    /// Select `field` with `operator`, joined by `AND`, mapped to a target
    /// column of the same name.
    #[must_use]
    pub fn new(field: FieldDef, operator: ConditionOperator) -> Self {
        Self {
            field,
            operator,
            connector: LogicalConnector::default(),
            target_column: String::new()
        }
    }

    /// Set the connector to the previous selection.
    #[must_use]
    pub fn with_connector(mut self, connector: LogicalConnector) -> Self {
        self.connector = connector;
        self
    }

    /// Set the target column.
    #[must_use]
    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into();
        self
    }

    /// Source field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Category of the source field.
    #[must_use]
    pub fn category(&self) -> FieldCategory {
        self.field.category()
    }

    /// Effective target column: `target_column`, or the field name when unset.
    #[must_use]
    pub fn column(&self) -> &str {
        if self.target_column.is_empty() {
            self.field.name()
        } else {
            &self.target_column
        }
    }

    /// Verify the operator is compatible with the field's category.
    ///
    /// # Errors
    ///
    /// [`GenerateError::IncompatibleOperator`] for `like` on a non-text field
    /// or `in` on a non-collection field.
    pub fn check_operator(&self) -> Result<()> {
        let category = self.category();
        if self.operator.accepts(category) {
            Ok(())
        } else {
            Err(GenerateError::IncompatibleOperator {
                field: self.field.name.clone(),
                operator: self.operator,
                category
            })
        }
    }
}
