// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conversions for generated identifiers.

/// Convert a camelCase name to a snake_case storage column.
///
/// An underscore is inserted only where a lowercase ASCII letter is directly
/// followed by an uppercase one; then everything is lowercased. Runs of
/// capitals are therefore kept together.
///
/// ```text
/// "userName"    -> "user_name"
/// "UserAccount" -> "user_account"
/// "HTTPServer"  -> "httpserver"
/// "already_ok"  -> "already_ok"
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.extend(c.to_lowercase());
    }
    out
}

/// Uppercase the first character, keeping the rest as-is.
///
/// Used to build accessor names: `userName` becomes `getUserName`.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_inserts_separator_after_lowercase() {
        assert_eq!(to_snake_case("userName"), "user_name");
        assert_eq!(to_snake_case("createdAtUtc"), "created_at_utc");
        assert_eq!(to_snake_case("UserAccount"), "user_account");
    }

    #[test]
    fn snake_case_keeps_capital_runs() {
        assert_eq!(to_snake_case("HTTPServer"), "httpserver");
        assert_eq!(to_snake_case("userID"), "user_id");
    }

    #[test]
    fn snake_case_passthrough() {
        assert_eq!(to_snake_case("name"), "name");
        assert_eq!(to_snake_case("user_name"), "user_name");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn digits_do_not_trigger_separator() {
        assert_eq!(to_snake_case("address2Line"), "address2line");
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("userName"), "UserName");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize(""), "");
    }
}
