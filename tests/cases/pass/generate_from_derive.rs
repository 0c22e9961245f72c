// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querysmith::{ConditionOperator, Describe, Dialect, FieldSelection, Generator, OperationKind};

#[allow(dead_code)]
#[derive(Describe)]
#[describe(qualified = "com.acme.dto.ProductQuery")]
struct ProductQuery {
    title: Option<String>
}

#[allow(dead_code)]
#[derive(Describe)]
#[describe(qualified = "com.acme.domain.Product")]
struct Product {
    id:    i64,
    title: String
}

fn main() {
    let source = ProductQuery::descriptor();
    let target = Product::descriptor();
    let selections = [FieldSelection::new(source.fields()[0].clone(), ConditionOperator::Like)];

    let markup = Generator::from(Dialect::Markup)
        .generate(&source, &selections, OperationKind::Select, &target)
        .unwrap();
    assert!(markup.contains("resultType=\"com.acme.domain.Product\""));
    assert!(markup.contains("title LIKE CONCAT('%', #{title}, '%')"));
}
