// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field specification model.
//!
//! Immutable value objects describing what a caller wants generated. All of
//! them are built fresh per request and never mutated by the generators.
//!
//! # Data Structures
//!
//! ```text
//! EntityDescriptor
//! ├── name: String              (e.g., "UserQuery")
//! ├── qualified_name: String    (e.g., "com.acme.dto.UserQuery")
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── name: String           (e.g., "userName")
//!         └── declared_type: String  (e.g., "String", "List<Long>")
//!
//! FieldSelection
//! ├── field: FieldDef
//! ├── operator: ConditionOperator   (=, !=, <, <=, >, >=, like, in)
//! ├── connector: LogicalConnector   (AND | OR)
//! └── target_column: String         (field name on the target entity)
//! ```
//!
//! # Module Structure
//!
//! - `category` - [`FieldCategory`] and [`categorize`]
//! - `entity` - [`EntityDescriptor`] and [`FieldDef`]
//! - `operator` - [`ConditionOperator`]
//! - `connector` - [`LogicalConnector`]
//! - `operation` - [`OperationKind`]
//! - `selection` - [`FieldSelection`]

mod category;
mod connector;
mod entity;
mod operation;
mod operator;
mod selection;

pub use category::{FieldCategory, categorize};
pub use connector::LogicalConnector;
pub use entity::{EntityDescriptor, FieldDef};
pub use operation::OperationKind;
pub use operator::ConditionOperator;
pub use selection::FieldSelection;
