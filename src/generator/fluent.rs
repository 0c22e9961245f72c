// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fluent query-builder generator.
//!
//! Emits a service method built on MyBatis-Plus `lambdaQuery()` and
//! `lambdaUpdate()` chains.
//!
//! # Method Shapes
//!
//! | Operation | Returns | Chain | Terminator |
//! |-----------|---------|-------|------------|
//! | `Select`, `SelectPage` | `List<Target>` | `lambdaQuery()` + conditions | `.list()` |
//! | `Update` | `boolean` | `lambdaUpdate()` + `.set(..)` per shared field + conditions | `.update(new Target())` |
//! | `Delete` | `boolean` | `lambdaUpdate()` + conditions | `.remove()` |
//! | `Insert` | `boolean` | none | `this.save(entity)` |
//!
//! The method name is the snake_case operation name followed by the target
//! entity name (`select_pageUser`).
//!
//! Conditions join with `AND` by default; an `.or()` call precedes every
//! field after the first whose connector is `OR`.

use super::{
    Render,
    context::Context,
    java::{INDENT, accessor, guard, method_reference, null_entity_guard, selection_guard, validation_block}
};
use crate::{
    model::{ConditionOperator, FieldSelection, LogicalConnector, OperationKind},
    utils::Presence
};

/// Generator for the `fluent` dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FluentGenerator;

impl Render for FluentGenerator {
    fn render(&self, ctx: &Context<'_>) -> String {
        let target = ctx.target().name();
        let method = format!("{}{target}", ctx.operation().as_str());
        let returns = if ctx.operation().is_select() {
            format!("List<{target}>")
        } else {
            "boolean".to_string()
        };

        [
            format!("public {returns} {method}({} entity) {{\n", ctx.source().name()),
            null_entity_guard(),
            validation_block(ctx),
            body(ctx),
            "}".to_string()
        ]
        .concat()
    }
}

/// The `return` statement of the method.
fn body(ctx: &Context<'_>) -> String {
    let target = ctx.target().name();
    let line = format!("{INDENT}{INDENT}");

    match ctx.operation() {
        OperationKind::Select | OperationKind::SelectPage => format!(
            "{INDENT}return this.lambdaQuery()\n{}{line}.list();\n",
            condition_chain(ctx)
        ),
        OperationKind::Update => format!(
            "{INDENT}return this.lambdaUpdate()\n{}{}{line}.update(new {target}());\n",
            set_chain(ctx),
            condition_chain(ctx)
        ),
        OperationKind::Delete => format!(
            "{INDENT}return this.lambdaUpdate()\n{}{line}.remove();\n",
            condition_chain(ctx)
        ),
        OperationKind::Insert => format!("{INDENT}return this.save(entity);\n")
    }
}

/// One guarded `.set(..)` per source field the target also declares.
fn set_chain(ctx: &Context<'_>) -> String {
    let target = ctx.target().name();
    ctx.shared_fields()
        .map(|field| {
            format!(
                "{INDENT}{INDENT}.set({}, {}, {})\n",
                guard(field.name(), field.category(), Presence::Present),
                method_reference(target, field.name()),
                accessor(field.name())
            )
        })
        .collect()
}

/// Guarded condition calls for every selection, with `.or()` markers.
fn condition_chain(ctx: &Context<'_>) -> String {
    let target = ctx.target().name();
    ctx.selections()
        .iter()
        .enumerate()
        .map(|(index, selection)| {
            let marker = if index > 0 && selection.connector == LogicalConnector::Or {
                format!("{INDENT}{INDENT}.or()\n")
            } else {
                String::new()
            };
            format!("{marker}{}", condition_call(target, selection))
        })
        .collect()
}

fn condition_call(target: &str, selection: &FieldSelection) -> String {
    format!(
        "{INDENT}{INDENT}.{}({}, {}, {})\n",
        condition_method(selection.operator),
        selection_guard(selection, Presence::Present),
        method_reference(target, selection.column()),
        accessor(selection.name())
    )
}

/// Wrapper method name for an operator.
const fn condition_method(operator: ConditionOperator) -> &'static str {
    match operator {
        ConditionOperator::Eq => "eq",
        ConditionOperator::Ne => "ne",
        ConditionOperator::Lt => "lt",
        ConditionOperator::Le => "le",
        ConditionOperator::Gt => "gt",
        ConditionOperator::Ge => "ge",
        ConditionOperator::Like => "like",
        ConditionOperator::In => "in"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityDescriptor, FieldDef};

    fn source() -> EntityDescriptor {
        EntityDescriptor::new("UserQuery", "com.acme.UserQuery")
            .with_field("age", "Integer")
            .with_field("city", "String")
            .with_field("keyword", "String")
    }

    fn target() -> EntityDescriptor {
        EntityDescriptor::new("User", "com.acme.User")
            .with_field("id", "Long")
            .with_field("age", "Integer")
            .with_field("city", "String")
    }

    fn render(selections: &[FieldSelection], operation: OperationKind) -> String {
        let (source, target) = (source(), target());
        let ctx = Context::new(&source, &target, selections, operation).unwrap();
        FluentGenerator.render(&ctx)
    }

    fn age_or_city() -> Vec<FieldSelection> {
        vec![
            FieldSelection::new(FieldDef::new("age", "Integer"), ConditionOperator::Ge),
            FieldSelection::new(FieldDef::new("city", "String"), ConditionOperator::Eq)
                .with_connector(LogicalConnector::Or),
        ]
    }

    #[test]
    fn full_select_output() {
        let expected = "\
public List<User> selectUser(UserQuery entity) {
    if (entity == null) {
        throw new IllegalArgumentException(\"Entity must not be null\");
    }
    if (entity.getAge() == null &&
        StringUtils.isEmpty(entity.getCity())) {
        throw new IllegalArgumentException(\"At least one search criterion must be provided\");
    }
    return this.lambdaQuery()
        .ge(entity.getAge() != null, User::getAge, entity.getAge())
        .or()
        .eq(StringUtils.isNotEmpty(entity.getCity()), User::getCity, entity.getCity())
        .list();
}";
        assert_eq!(render(&age_or_city(), OperationKind::Select), expected);
    }

    #[test]
    fn first_field_connector_is_ignored() {
        let selections = [
            FieldSelection::new(FieldDef::new("age", "Integer"), ConditionOperator::Eq)
                .with_connector(LogicalConnector::Or),
        ];
        let output = render(&selections, OperationKind::Select);
        assert!(!output.contains(".or()"));
    }

    #[test]
    fn page_skips_validation() {
        let output = render(&age_or_city(), OperationKind::SelectPage);
        assert!(output.starts_with("public List<User> select_pageUser(UserQuery entity) {"));
        assert!(!output.contains("At least one search criterion"));
        assert!(output.ends_with("        .list();\n}"));
    }

    #[test]
    fn update_sets_shared_fields() {
        let selections = [FieldSelection::new(FieldDef::new("age", "Integer"), ConditionOperator::Eq)];
        let output = render(&selections, OperationKind::Update);
        assert!(output.starts_with("public boolean updateUser(UserQuery entity) {"));
        assert!(output.contains("age must not be null or empty"));
        assert!(output.contains(
            "    return this.lambdaUpdate()\n\
             \x20       .set(entity.getAge() != null, User::getAge, entity.getAge())\n\
             \x20       .set(StringUtils.isNotEmpty(entity.getCity()), User::getCity, entity.getCity())\n\
             \x20       .eq(entity.getAge() != null, User::getAge, entity.getAge())\n\
             \x20       .update(new User());\n}"
        ));
        assert!(!output.contains("getKeyword"));
    }

    #[test]
    fn delete_removes() {
        let output = render(&age_or_city(), OperationKind::Delete);
        assert!(output.starts_with("public boolean deleteUser(UserQuery entity) {"));
        assert!(output.contains("    return this.lambdaUpdate()\n"));
        assert!(output.ends_with("        .remove();\n}"));
        assert_eq!(output.matches("must not be null or empty").count(), 2);
    }

    #[test]
    fn insert_saves() {
        let output = render(&age_or_city(), OperationKind::Insert);
        assert!(output.starts_with("public boolean insertUser(UserQuery entity) {"));
        assert!(output.ends_with("    return this.save(entity);\n}"));
        assert!(!output.contains("lambda"));
    }

    #[test]
    fn target_column_drives_method_reference() {
        let selections = [FieldSelection::new(FieldDef::new("keyword", "String"), ConditionOperator::Like)
            .with_target_column("city")];
        let output = render(&selections, OperationKind::Select);
        assert!(output.contains(
            ".like(StringUtils.isNotEmpty(entity.getKeyword()), User::getCity, entity.getKeyword())"
        ));
    }

    #[test]
    fn condition_methods() {
        let names: Vec<_> = ConditionOperator::ALL.into_iter().map(condition_method).collect();
        assert_eq!(names, ["eq", "ne", "lt", "le", "gt", "ge", "like", "in"]);
    }
}
