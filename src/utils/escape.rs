// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markup escaping.

/// Replace `& < > " '` with their markup entities.
///
/// Single pass over the input, so produced entities are never escaped again.
/// Input without special characters is returned unchanged.
///
/// # Examples
///
/// ```
/// use querysmith::utils::escape_markup_special_chars;
///
/// assert_eq!(escape_markup_special_chars("<="), "&lt;=");
/// assert_eq!(escape_markup_special_chars("a & 'b'"), "a &amp; &apos;b&apos;");
/// assert_eq!(escape_markup_special_chars("!="), "!=");
/// ```
#[must_use]
pub fn escape_markup_special_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other)
        }
    }
    out
}
