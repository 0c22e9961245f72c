// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared helpers for all generators.
//!
//! Free functions only; nothing here holds state.
//!
//! # Submodules
//!
//! - [`naming`] - snake-case columns and capitalized accessors
//! - [`escape`] - markup entity escaping
//! - [`guard`] - emptiness guards rendered per dialect syntax

pub mod escape;
pub mod guard;
pub mod naming;

pub use escape::escape_markup_special_chars;
pub use guard::{GuardSyntax, JavaGuards, OgnlGuards, Presence, emptiness_guard};
pub use naming::{capitalize, to_snake_case};
