// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Self-contained generation requests.
//!
//! A [`GenerationRequest`] bundles every input of [`Generator::generate`] so a
//! caller can build it once (or load it with the `serde` feature) and hand it
//! over as a single value.
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "dialect": "markup",
//!   "operation": "select_page",
//!   "source": { "name": "UserQuery", "qualified": "com.acme.UserQuery",
//!               "fields": [{ "name": "age", "type": "Integer" }] },
//!   "target": { "name": "User", "qualified": "com.acme.User",
//!               "fields": [{ "name": "age", "type": "Integer" }] },
//!   "selections": [
//!     { "field": { "name": "age", "type": "Integer" }, "operator": ">=" }
//!   ]
//! }
//! ```

use crate::{
    dialect::Dialect,
    error::Result,
    generator::Generator,
    model::{EntityDescriptor, FieldSelection, OperationKind}
};

/// Everything needed for one [`Generator::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    /// Output dialect.
    pub dialect:    Dialect,
    /// Requested operation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub operation:  OperationKind,
    /// Entity supplying the values.
    pub source:     EntityDescriptor,
    /// Persisted entity.
    pub target:     EntityDescriptor,
    /// Selected fields in order.
    pub selections: Vec<FieldSelection>
}

impl GenerationRequest {
    /// Create a request with no selections.
    #[must_use]
    pub fn new(
        dialect: Dialect,
        operation: OperationKind,
        source: EntityDescriptor,
        target: EntityDescriptor
    ) -> Self {
        Self {
            dialect,
            operation,
            source,
            target,
            selections: Vec::new()
        }
    }

    /// Append a selection.
    #[must_use]
    pub fn select(mut self, selection: FieldSelection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Run the request.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`].
    pub fn generate(&self) -> Result<String> {
        Generator::from(self.dialect).generate(
            &self.source,
            &self.selections,
            self.operation,
            &self.target
        )
    }
}
