// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # querysmith-derive
//!
//! `#[derive(Describe)]` for `querysmith`. Use it through the `querysmith`
//! crate, which re-exports the macro next to the trait it implements.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Describe)]
//! #[describe(
//!     name = "UserQuery",                     // entity name (default: struct name)
//!     qualified = "com.acme.dto.UserQuery",   // default: module_path!()::Name
//!     rename_all = "camelCase"                // camelCase | snake_case | PascalCase | verbatim
//! )]
//! pub struct UserQuery {
//!     pub user_name: Option<String>,          // userName: String
//!     pub tag_ids: Vec<i64>,                  // tagIds: List<Long>
//!     #[describe(rename = "createdFrom", type_name = "LocalDate")]
//!     pub from: Option<chrono::NaiveDate>,
//!     #[describe(skip)]
//!     pub page: u32
//! }
//! ```

mod describe;

use proc_macro::TokenStream;

/// Derive `querysmith::Describe` for a struct with named fields.
///
/// The generated `descriptor()` lists fields in declaration order, with
/// names renamed per `rename_all` and types mapped to declared type names.
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive(input)
}
