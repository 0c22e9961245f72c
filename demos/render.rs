// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Render Example with querysmith
//!
//! Builds one selection over derived entities and prints it in every
//! dialect and operation:
//! - `specification` for a JPA `Specification<T>`
//! - `fluent` for a MyBatis-Plus lambda chain
//! - `markup` for a MyBatis mapper statement
//!
//! Run with `RUST_LOG=querysmith=trace cargo run --example render` to see the
//! generator's events.

use querysmith::{
    ConditionOperator, Describe, Dialect, FieldSelection, Generator, LogicalConnector,
    OperationKind
};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Entity Definitions
// ============================================================================

/// Search form submitted by the UI.
#[allow(dead_code)]
#[derive(Describe)]
#[describe(qualified = "com.acme.shop.dto.ProductQuery")]
struct ProductQuery {
    title:        Option<String>,
    min_price:    Option<f64>,
    category_ids: Vec<i64>
}

/// Persisted product.
#[allow(dead_code)]
#[derive(Describe)]
#[describe(qualified = "com.acme.shop.domain.Product")]
struct Product {
    id:          i64,
    title:       String,
    min_price:   f64,
    category_id: i64
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("querysmith=debug"))
        )
        .init();

    let source = ProductQuery::descriptor();
    let target = Product::descriptor();

    let selections: Vec<FieldSelection> = source
        .fields()
        .iter()
        .map(|field| {
            let operator = match field.name() {
                "title" => ConditionOperator::Like,
                "minPrice" => ConditionOperator::Ge,
                _ => ConditionOperator::In
            };
            FieldSelection::new(field.clone(), operator)
                .with_target_column(target.resolve_column(field.name()))
        })
        .enumerate()
        .map(|(index, selection)| {
            if index == 2 {
                selection.with_connector(LogicalConnector::Or)
            } else {
                selection
            }
        })
        .collect();

    for dialect in Dialect::ALL {
        let generator = Generator::from(dialect);
        for operation in OperationKind::ALL {
            match generator.generate(&source, &selections, operation, &target) {
                Ok(code) => println!("// {dialect} / {operation}\n{code}\n"),
                Err(err) => tracing::error!(%dialect, %operation, error = %err, "generation failed")
            }
        }
    }
}
