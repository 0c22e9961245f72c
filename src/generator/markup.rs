// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameterized markup generator.
//!
//! Emits one MyBatis mapper statement. Values are bound with `#{field}`
//! placeholders and every clause sits inside an OGNL `<if test="...">` that
//! checks the field is present.
//!
//! # Statements
//!
//! | Operation | Tag | Body |
//! |-----------|-----|------|
//! | `Select`, `SelectPage` | `<select resultType="..">` | column list, `<where>` |
//! | `Update` | `<update>` | `<set>` over shared fields, `<where>` |
//! | `Delete` | `<delete>` | outer `<if>` wrapping `DELETE FROM` and `<where>` |
//! | `Insert` | `<insert>` | column `<trim>` and value `<trim>` |
//!
//! The statement `id` is the snake_case operation name followed by the
//! source entity name (`select_pageUserQuery`). The table name is the
//! snake_case target name.
//!
//! # Guards
//!
//! Two guard policies exist and are kept apart on purpose:
//!
//! - [`criteria_missing_test`] opens every `<where>` outside of `SelectPage`
//!   and emits `1=0` when it holds. Missing checks join with `or` for
//!   `Update`/`Delete` and with `and` otherwise.
//! - [`any_criterion_supplied_test`] wraps the whole `Delete` statement and
//!   only checks for `null`.

use super::{Render, context::Context};
use crate::{
    model::{ConditionOperator, FieldSelection, OperationKind},
    utils::{OgnlGuards, Presence, emptiness_guard, escape_markup_special_chars, to_snake_case}
};

const INDENT: &str = "    ";

/// Generator for the `markup` dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkupGenerator;

impl Render for MarkupGenerator {
    fn render(&self, ctx: &Context<'_>) -> String {
        match ctx.operation() {
            OperationKind::Select | OperationKind::SelectPage => select(ctx),
            OperationKind::Update => update(ctx),
            OperationKind::Delete => delete(ctx),
            OperationKind::Insert => insert(ctx)
        }
    }
}

fn select(ctx: &Context<'_>) -> String {
    let columns = ctx
        .target()
        .fields()
        .iter()
        .map(|f| to_snake_case(f.name()))
        .collect::<Vec<_>>();
    let columns = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    };

    [
        format!(
            "<{} id=\"{}\" resultType=\"{}\">\n",
            ctx.operation().statement_tag(),
            statement_id(ctx),
            ctx.target().qualified_name()
        ),
        format!("{INDENT}SELECT {columns}\n"),
        format!("{INDENT}FROM {}\n", table_name(ctx)),
        where_block(ctx, 1),
        closing_tag(ctx)
    ]
    .concat()
}

fn update(ctx: &Context<'_>) -> String {
    let assignments: String = ctx
        .shared_fields()
        .map(|field| {
            let test = emptiness_guard(&OgnlGuards, field.name(), field.category(), Presence::Present);
            let body = format!("{} = #{{{}}},", to_snake_case(field.name()), field.name());
            conditional(2, &test, &body)
        })
        .collect();

    [
        opening_tag(ctx),
        format!("{INDENT}UPDATE {}\n", table_name(ctx)),
        format!("{INDENT}<set>\n"),
        assignments,
        format!("{INDENT}</set>\n"),
        where_block(ctx, 1),
        closing_tag(ctx)
    ]
    .concat()
}

fn delete(ctx: &Context<'_>) -> String {
    [
        opening_tag(ctx),
        format!("{INDENT}<if test=\"{}\">\n", any_criterion_supplied_test(ctx.selections())),
        format!("{}DELETE FROM {}\n", pad(2), table_name(ctx)),
        where_block(ctx, 2),
        format!("{INDENT}</if>\n"),
        closing_tag(ctx)
    ]
    .concat()
}

fn insert(ctx: &Context<'_>) -> String {
    let columns: String = ctx
        .selections()
        .iter()
        .map(|s| conditional(2, &present_test(s), &format!("{},", to_snake_case(s.column()))))
        .collect();
    let values: String = ctx
        .selections()
        .iter()
        .map(|s| conditional(2, &present_test(s), &format!("#{{{}}},", s.name())))
        .collect();

    [
        opening_tag(ctx),
        format!("{INDENT}INSERT INTO {}\n", table_name(ctx)),
        format!("{INDENT}<trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">\n"),
        columns,
        format!("{INDENT}</trim>\n"),
        format!("{INDENT}<trim prefix=\"VALUES (\" suffix=\")\" suffixOverrides=\",\">\n"),
        values,
        format!("{INDENT}</trim>\n"),
        closing_tag(ctx)
    ]
    .concat()
}

/// `<where>` block at `depth`: optional safety guard, then one clause per
/// selection.
fn where_block(ctx: &Context<'_>, depth: usize) -> String {
    let inner = depth + 1;
    let guard = if ctx.operation().requires_guards() {
        let test = criteria_missing_test(ctx.selections(), ctx.operation());
        conditional(inner, &test, "1=0 <!-- no usable criteria -->")
    } else {
        String::new()
    };
    let clauses: String = ctx
        .selections()
        .iter()
        .map(|s| field_clause(s, inner))
        .collect();

    format!(
        "{open}<where>\n{guard}{clauses}{open}</where>\n",
        open = pad(depth)
    )
}

/// Test of the safety guard opening a `<where>` block.
///
/// A single check is used as is. Several checks are parenthesized and joined
/// with ` or ` for `Update` and `Delete`, ` and ` for every other operation.
fn criteria_missing_test(selections: &[FieldSelection], operation: OperationKind) -> String {
    let checks = selections
        .iter()
        .map(|s| emptiness_guard(&OgnlGuards, s.name(), s.category(), Presence::Missing))
        .collect::<Vec<_>>();
    if let [single] = checks.as_slice() {
        return single.clone();
    }

    let join = match operation {
        OperationKind::Update | OperationKind::Delete => " or ",
        OperationKind::Select | OperationKind::SelectPage | OperationKind::Insert => " and "
    };
    checks
        .iter()
        .map(|check| format!("({check})"))
        .collect::<Vec<_>>()
        .join(join)
}

/// Test of the outer `<if>` around a delete: some field is not `null`.
fn any_criterion_supplied_test(selections: &[FieldSelection]) -> String {
    selections
        .iter()
        .map(|s| format!("{} != null", s.name()))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// One guarded condition inside `<where>`.
fn field_clause(selection: &FieldSelection, depth: usize) -> String {
    let column = to_snake_case(selection.column());
    let field = selection.name();
    let connector = selection.connector.keyword();

    let body = match selection.operator {
        ConditionOperator::Like => {
            format!("{connector} {column} LIKE CONCAT('%', #{{{field}}}, '%')")
        }
        ConditionOperator::In => format!(
            "{connector} {column} IN\n{}<foreach item=\"item\" index=\"index\" collection=\"{field}\" \
             open=\"(\" separator=\",\" close=\")\">#{{item}}</foreach>",
            pad(depth + 1)
        ),
        operator => format!(
            "{connector} {column} {} #{{{field}}}",
            escape_markup_special_chars(operator.symbol())
        )
    };
    conditional(depth, &present_test(selection), &body)
}

fn present_test(selection: &FieldSelection) -> String {
    emptiness_guard(&OgnlGuards, selection.name(), selection.category(), Presence::Present)
}

/// `<if test="..">` at `depth` with `body` one level deeper.
fn conditional(depth: usize, test: &str, body: &str) -> String {
    let open = pad(depth);
    let inner = pad(depth + 1);
    format!("{open}<if test=\"{test}\">\n{inner}{body}\n{open}</if>\n")
}

fn opening_tag(ctx: &Context<'_>) -> String {
    format!("<{} id=\"{}\">\n", ctx.operation().statement_tag(), statement_id(ctx))
}

fn closing_tag(ctx: &Context<'_>) -> String {
    format!("</{}>", ctx.operation().statement_tag())
}

fn statement_id(ctx: &Context<'_>) -> String {
    format!("{}{}", ctx.operation().as_str(), ctx.source().name())
}

fn table_name(ctx: &Context<'_>) -> String {
    to_snake_case(ctx.target().name())
}

fn pad(depth: usize) -> String {
    INDENT.repeat(depth)
}
