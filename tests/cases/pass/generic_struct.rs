// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querysmith::Describe;

#[allow(dead_code)]
#[derive(Describe)]
struct Batch<T>
where
    T: Clone
{
    items: Vec<T>,
    label: &'static str
}

fn main() {
    let descriptor = Batch::<i32>::descriptor();
    assert_eq!(descriptor.fields()[0].declared_type(), "List<T>");
    assert_eq!(descriptor.fields()[1].declared_type(), "String");
}
