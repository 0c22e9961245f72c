// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Engine errors.
//!
//! Every error is a synchronous failure of a single call; no text is produced
//! alongside it. Runtime guards inside the generated code ("entity must not be
//! null", "at least one criterion") are output, not errors.

use thiserror::Error;

use crate::model::{ConditionOperator, FieldCategory};

/// Failure to generate a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The dialect tag is not one of the supported dialects.
    #[error("unsupported dialect `{tag}` (expected specification, fluent or markup)")]
    UnsupportedDialect {
        /// Tag as supplied by the caller.
        tag: String
    },

    /// The operator cannot be applied to the field's category.
    #[error("operator `{operator}` cannot be applied to {category} field `{field}`")]
    IncompatibleOperator {
        /// Offending field.
        field:    String,
        /// Requested operator.
        operator: ConditionOperator,
        /// Category of the field.
        category: FieldCategory
    },

    /// No fields were selected.
    #[error("at least one field must be selected")]
    EmptySelection,

    /// An operator symbol did not parse.
    #[error("unknown condition operator `{symbol}`")]
    UnknownOperator {
        /// Symbol as supplied by the caller.
        symbol: String
    },

    /// A connector keyword did not parse.
    #[error("unknown logical connector `{value}` (expected AND or OR)")]
    UnknownConnector {
        /// Value as supplied by the caller.
        value: String
    },

    /// An operation name did not parse.
    #[error("unknown operation `{value}`")]
    UnknownOperation {
        /// Value as supplied by the caller.
        value: String
    }
}

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
