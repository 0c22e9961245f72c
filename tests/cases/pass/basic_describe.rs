// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querysmith::Describe;

#[allow(dead_code)]
#[derive(Describe)]
#[describe(qualified = "com.acme.domain.User")]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: Option<String>,
    pub role_ids: Vec<i64>
}

fn main() {
    let descriptor = User::descriptor();
    assert_eq!(descriptor.name(), "User");
    assert_eq!(descriptor.qualified_name(), "com.acme.domain.User");
    assert_eq!(descriptor.fields().len(), 4);
    assert_eq!(descriptor.fields()[1].name(), "userName");
    assert_eq!(descriptor.fields()[3].declared_type(), "List<Long>");
}
