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

//! # querysmith
//!
//! Deterministic multi-dialect query generator. Describe a source entity, pick
//! some of its fields with an operator and a connector each, choose an
//! operation and a dialect, and get back the source text of a query.
//!
//! # Quick Start
//!
//! ```
//! use querysmith::{
//!     ConditionOperator, Describe, FieldSelection, LogicalConnector, OperationKind,
//!     select_generator
//! };
//!
//! #[derive(Describe)]
//! #[describe(qualified = "com.acme.dto.UserQuery")]
//! struct UserQuery {
//!     age:  Option<i32>,
//!     city: Option<String>
//! }
//!
//! #[derive(Describe)]
//! #[describe(qualified = "com.acme.domain.User")]
//! struct User {
//!     id:   i64,
//!     age:  i32,
//!     city: String
//! }
//!
//! let source = UserQuery::descriptor();
//! let target = User::descriptor();
//! let selections = [
//!     FieldSelection::new(source.fields()[0].clone(), ConditionOperator::Ge),
//!     FieldSelection::new(source.fields()[1].clone(), ConditionOperator::Eq)
//!         .with_connector(LogicalConnector::Or),
//! ];
//!
//! let code = select_generator("mybatis-plus")?
//!     .generate(&source, &selections, OperationKind::Select, &target)?;
//! assert!(code.contains("        .or()\n"));
//! # Ok::<(), querysmith::GenerateError>(())
//! ```
//!
//! # Dialects
//!
//! | Tag | Aliases | Output |
//! |-----|---------|--------|
//! | `specification` | `jpa`, `criteria` | `Specification<T>` factory (JPA Criteria API) |
//! | `fluent` | `mybatis-plus`, `mybatis_plus`, `mp` | `lambdaQuery()` / `lambdaUpdate()` chain |
//! | `markup` | `mybatis`, `xml` | MyBatis mapper statement |
//!
//! # Operations
//!
//! | Operation | Validation guards |
//! |-----------|-------------------|
//! | `select` | one guard: at least one criterion present |
//! | `select_page` | none |
//! | `update`, `delete`, `insert` | one guard per selected field |
//!
//! # Errors
//!
//! Generation fails with [`GenerateError`] before any text is produced:
//! unknown dialect tags, empty selections, and operators that do not fit a
//! field's category (`like` needs text, `in` needs a collection).
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the model, [`Dialect`] and
//!   [`GenerationRequest`]

#[cfg(test)]
extern crate self as querysmith;

mod describe;
mod dialect;
mod error;
mod generator;
mod model;
mod request;
pub mod utils;

pub use describe::Describe;
pub use dialect::{Dialect, select_generator};
pub use error::{GenerateError, Result};
pub use generator::{Context, FluentGenerator, Generator, MarkupGenerator, Render, SpecificationGenerator};
pub use model::{
    ConditionOperator, EntityDescriptor, FieldCategory, FieldDef, FieldSelection, LogicalConnector,
    OperationKind, categorize
};
/// Derive [`Describe`] for a struct with named fields.
///
/// # Attributes
///
/// | Attribute | Level | Effect |
/// |-----------|-------|--------|
/// | `name = ".."` | struct | Entity name (default: struct name) |
/// | `qualified = ".."` | struct | Qualified name (default: `module_path!()::Name`) |
/// | `rename_all = ".."` | struct | `camelCase` (default), `snake_case`, `PascalCase`, `verbatim` |
/// | `skip` | field | Leave the field out |
/// | `rename = ".."` | field | Field name as is |
/// | `type_name = ".."` | field | Declared type as is |
///
/// Field types map to declared names: `String` and `&str` become `String`,
/// `Option<T>` and `Box<T>` unwrap, `Vec`-like types become `List<..>` and
/// sets become `Set<..>`.
pub use querysmith_derive::Describe;
pub use request::GenerationRequest;
