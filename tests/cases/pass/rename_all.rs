// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use querysmith::Describe;

#[allow(dead_code)]
#[derive(Describe)]
#[describe(rename_all = "snake_case")]
struct AuditRow {
    created_at: i64,
    actor_id: Option<u64>
}

#[allow(dead_code)]
#[derive(Describe)]
#[describe(rename_all = "verbatim")]
struct Legacy {
    user_name: String
}

fn main() {
    let audit = AuditRow::descriptor();
    assert_eq!(audit.fields()[0].name(), "created_at");
    assert_eq!(audit.fields()[1].declared_type(), "Long");
    assert!(audit.qualified_name().ends_with("::AuditRow"));

    assert_eq!(Legacy::descriptor().fields()[0].name(), "user_name");
}
