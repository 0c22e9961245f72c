// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validated input shared by all renderers.

use crate::{
    error::{GenerateError, Result},
    model::{EntityDescriptor, FieldDef, FieldSelection, OperationKind}
};

/// Borrowed, validated view of one generation request.
///
/// Constructing a `Context` is the only place engine errors are raised.
/// Renderers can rely on a non-empty selection whose operators all fit their
/// fields' categories.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    source:     &'a EntityDescriptor,
    target:     &'a EntityDescriptor,
    selections: &'a [FieldSelection],
    operation:  OperationKind
}

impl<'a> Context<'a> {
    /// Validate a request.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptySelection`] when nothing is selected
    /// - [`GenerateError::IncompatibleOperator`] from the first selection whose
    ///   operator does not fit its field
    pub fn new(
        source: &'a EntityDescriptor,
        target: &'a EntityDescriptor,
        selections: &'a [FieldSelection],
        operation: OperationKind
    ) -> Result<Self> {
        if selections.is_empty() {
            return Err(GenerateError::EmptySelection);
        }
        selections.iter().try_for_each(FieldSelection::check_operator)?;

        Ok(Self {
            source,
            target,
            selections,
            operation
        })
    }

    /// The parameter entity supplying values.
    #[must_use]
    pub fn source(&self) -> &'a EntityDescriptor {
        self.source
    }

    /// The persisted entity being queried.
    #[must_use]
    pub fn target(&self) -> &'a EntityDescriptor {
        self.target
    }

    /// Selected fields in order.
    #[must_use]
    pub fn selections(&self) -> &'a [FieldSelection] {
        self.selections
    }

    /// Requested operation.
    #[must_use]
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Source fields that the target declares under the same name.
    ///
    /// These are the assignable fields of an update.
    pub fn shared_fields(&self) -> impl Iterator<Item = &'a FieldDef> + 'a {
        let target = self.target;
        self.source
            .fields()
            .iter()
            .filter(move |f| target.has_field(f.name()))
    }
}
