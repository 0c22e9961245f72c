// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Java fragments shared by the specification and fluent generators.
//!
//! Both dialects read values through bean accessors on a parameter named
//! `entity` and reject bad input with `IllegalArgumentException`.

use super::context::Context;
use crate::{
    model::{FieldCategory, FieldSelection},
    utils::{JavaGuards, Presence, capitalize, emptiness_guard}
};

/// Indentation unit of generated Java.
pub const INDENT: &str = "    ";

/// Accessor call on the parameter: `entity.getUserName()`.
pub fn accessor(field: &str) -> String {
    format!("entity.get{}()", capitalize(field))
}

/// Method reference on a class: `User::getUserName`.
pub fn method_reference(class: &str, field: &str) -> String {
    format!("{class}::get{}", capitalize(field))
}

/// Emptiness check for a field read through its accessor.
pub fn guard(field: &str, category: FieldCategory, presence: Presence) -> String {
    emptiness_guard(&JavaGuards, &accessor(field), category, presence)
}

/// Guard for a selected field.
pub fn selection_guard(selection: &FieldSelection, presence: Presence) -> String {
    guard(selection.name(), selection.category(), presence)
}

/// `throw` block rejecting a `null` parameter.
pub fn null_entity_guard() -> String {
    throw_if("entity == null", "Entity must not be null")
}

/// Validation guards at the top of a generated method.
///
/// | Operation | Guard |
/// |-----------|-------|
/// | `SelectPage` | none |
/// | `Select` | one guard: every selected field is empty |
/// | `Update`, `Delete`, `Insert` | one guard per selected field |
pub fn validation_block(ctx: &Context<'_>) -> String {
    let operation = ctx.operation();
    if !operation.requires_guards() {
        return String::new();
    }

    if operation.is_select() {
        criteria_validation(ctx.selections())
    } else {
        ctx.selections().iter().map(field_validation).collect()
    }
}

/// Single guard failing when all selected fields are empty.
fn criteria_validation(selections: &[FieldSelection]) -> String {
    let continuation = format!(" &&\n{INDENT}{INDENT}");
    let condition = selections
        .iter()
        .map(|s| selection_guard(s, Presence::Missing))
        .collect::<Vec<_>>()
        .join(&continuation);
    throw_if(&condition, "At least one search criterion must be provided")
}

/// Guard failing when one field is empty.
fn field_validation(selection: &FieldSelection) -> String {
    throw_if(
        &selection_guard(selection, Presence::Missing),
        &format!("{} must not be null or empty", selection.name())
    )
}

/// `if (condition) { throw new IllegalArgumentException("message"); }`
fn throw_if(condition: &str, message: &str) -> String {
    format!(
        "{INDENT}if ({condition}) {{\n\
         {INDENT}{INDENT}throw new IllegalArgumentException(\"{message}\");\n\
         {INDENT}}}\n"
    )
}
