// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Specification generator.
//!
//! Emits a static factory returning a JPA Criteria `Specification<Target>`.
//!
//! # Generated Code
//!
//! ```java
//! public static Specification<User> getSelectSpecification(UserQuery entity) {
//!     if (entity == null) {
//!         throw new IllegalArgumentException("Entity must not be null");
//!     }
//!     if (StringUtils.isEmpty(entity.getName()) &&
//!         entity.getAge() == null) {
//!         throw new IllegalArgumentException("At least one search criterion must be provided");
//!     }
//!     return (root, query, cb) -> {
//!         List<Predicate> predicates = new ArrayList<>();
//!
//!         if (StringUtils.isNotEmpty(entity.getName())) {
//!             predicates.add(cb.like(root.get("name"), "%" + entity.getName() + "%"));
//!         }
//!         if (entity.getAge() != null) {
//!             predicates.add(cb.greaterThanOrEqualTo(root.get("age"), entity.getAge()));
//!         }
//!         return cb.and(predicates.toArray(new Predicate[0]));
//!     };
//! }
//! ```
//!
//! Connectors are not rendered: the accumulated predicates are always
//! combined with `cb.and`.

use super::{
    Render,
    context::Context,
    java::{INDENT, accessor, null_entity_guard, selection_guard, validation_block}
};
use crate::{
    model::{ConditionOperator, FieldSelection},
    utils::Presence
};

/// Generator for the `specification` dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecificationGenerator;

impl Render for SpecificationGenerator {
    fn render(&self, ctx: &Context<'_>) -> String {
        let target = ctx.target().name();
        let source = ctx.source().name();
        let method = format!("get{}Specification", ctx.operation().pascal_name());
        let predicates: String = ctx.selections().iter().map(predicate_clause).collect();

        [
            format!("public static Specification<{target}> {method}({source} entity) {{\n"),
            null_entity_guard(),
            validation_block(ctx),
            format!("{INDENT}return (root, query, cb) -> {{\n"),
            format!("{INDENT}{INDENT}List<Predicate> predicates = new ArrayList<>();\n\n"),
            predicates,
            format!("{INDENT}{INDENT}return cb.and(predicates.toArray(new Predicate[0]));\n"),
            format!("{INDENT}}};\n"),
            "}".to_string()
        ]
        .concat()
    }
}

/// Append one predicate when the field has a value.
fn predicate_clause(selection: &FieldSelection) -> String {
    let present = selection_guard(selection, Presence::Present);
    let expression = predicate_expression(selection);
    let body = format!("{INDENT}{INDENT}");
    format!(
        "{body}if ({present}) {{\n\
         {body}{INDENT}predicates.add({expression});\n\
         {body}}}\n"
    )
}

/// Criteria-builder expression comparing the target path with the value.
///
/// | Operator | Expression |
/// |----------|------------|
/// | `=` | `cb.equal(path, value)` |
/// | `!=` | `cb.notEqual(path, value)` |
/// | `<` / `<=` | `cb.lessThan` / `cb.lessThanOrEqualTo` |
/// | `>` / `>=` | `cb.greaterThan` / `cb.greaterThanOrEqualTo` |
/// | `like` | `cb.like(path, "%" + value + "%")` |
/// | `in` | `path.in(value)` |
fn predicate_expression(selection: &FieldSelection) -> String {
    let path = format!("root.get(\"{}\")", selection.column());
    let value = accessor(selection.name());

    let method = match selection.operator {
        ConditionOperator::Like => {
            return format!("cb.like({path}, \"%\" + {value} + \"%\")");
        }
        ConditionOperator::In => return format!("{path}.in({value})"),
        ConditionOperator::Eq => "equal",
        ConditionOperator::Ne => "notEqual",
        ConditionOperator::Lt => "lessThan",
        ConditionOperator::Le => "lessThanOrEqualTo",
        ConditionOperator::Gt => "greaterThan",
        ConditionOperator::Ge => "greaterThanOrEqualTo"
    };
    format!("cb.{method}({path}, {value})")
}
