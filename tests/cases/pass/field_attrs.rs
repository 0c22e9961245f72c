// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use querysmith::{Describe, FieldCategory};

#[allow(dead_code)]
#[derive(Describe)]
#[describe(name = "OrderQuery", qualified = "com.acme.dto.OrderQuery")]
pub struct OrderFilter {
    #[describe(rename = "orderNo")]
    pub number: Option<String>,

    #[describe(type_name = "BigDecimal")]
    pub min_total: Option<f64>,

    pub tags: BTreeSet<String>,

    #[describe(skip)]
    pub page: u32,

    pub r#type: Option<String>
}

fn main() {
    let descriptor = OrderFilter::descriptor();
    assert_eq!(descriptor.name(), "OrderQuery");

    let names: Vec<_> = descriptor.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["orderNo", "minTotal", "tags", "type"]);

    let categories: Vec<_> = descriptor.fields().iter().map(|f| f.category()).collect();
    assert_eq!(
        categories,
        [
            FieldCategory::Text,
            FieldCategory::Scalar,
            FieldCategory::Collection,
            FieldCategory::Text
        ]
    );
}
