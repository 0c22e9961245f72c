// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query generators.
//!
//! [`Generator`] is a closed set of three implementations, one per
//! [`Dialect`]. Dispatch is an exhaustive `match`, so adding a dialect means
//! extending both the tag and this enum.
//!
//! # Supported Dialects
//!
//! | Dialect | Generator | Output |
//! |---------|-----------|--------|
//! | `specification` | [`SpecificationGenerator`] | `Specification<T>` factory method (JPA Criteria API) |
//! | `fluent` | [`FluentGenerator`] | chained `lambdaQuery()`/`lambdaUpdate()` method (MyBatis-Plus) |
//! | `markup` | [`MarkupGenerator`] | `<select>`/`<update>`/`<delete>`/`<insert>` mapper statement (MyBatis XML) |
//!
//! # Pipeline
//!
//! ```text
//! generate(source, selections, operation, target)
//!   └── Context::new        validate: non-empty selection, operator/category fit
//!         └── Render::render  pure text assembly, cannot fail
//! ```

mod context;
mod fluent;
mod java;
mod markup;
mod specification;

pub use context::Context;
pub use fluent::FluentGenerator;
pub use markup::MarkupGenerator;
pub use specification::SpecificationGenerator;

use tracing::{debug, trace};

use crate::{
    dialect::Dialect,
    error::Result,
    model::{EntityDescriptor, FieldSelection, OperationKind}
};

/// Text assembly for one dialect.
///
/// Implementations receive an already validated [`Context`] and only build
/// strings; every engine error is raised before `render` is called.
pub trait Render {
    /// Build the complete output text.
    fn render(&self, ctx: &Context<'_>) -> String;
}

/// A generator for one of the supported dialects.
///
/// # Example
///
/// ```
/// use querysmith::{
///     ConditionOperator, Dialect, EntityDescriptor, FieldDef, FieldSelection, Generator,
///     OperationKind
/// };
///
/// let form = EntityDescriptor::new("UserForm", "com.acme.UserForm").with_field("name", "String");
/// let user = EntityDescriptor::new("User", "com.acme.User").with_field("name", "String");
/// let selections = [FieldSelection::new(FieldDef::new("name", "String"), ConditionOperator::Eq)];
///
/// let generator = Generator::from(Dialect::Fluent);
/// let code = generator
///     .generate(&form, &selections, OperationKind::Select, &user)
///     .unwrap();
/// assert!(code.starts_with("public List<User> selectUser(UserForm entity) {"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Typed predicate-builder function.
    Specification(SpecificationGenerator),

    /// Chained query-builder method body.
    Fluent(FluentGenerator),

    /// Conditional mapper markup.
    Markup(MarkupGenerator)
}

impl Generator {
    /// Dialect this generator emits.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::Specification(_) => Dialect::Specification,
            Self::Fluent(_) => Dialect::Fluent,
            Self::Markup(_) => Dialect::Markup
        }
    }

    /// Generate query text for `selections` over `source`, reading or writing
    /// `target`.
    ///
    /// Pure: identical inputs always yield byte-identical output.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::EmptySelection`](crate::GenerateError::EmptySelection)
    ///   when `selections` is empty
    /// - [`GenerateError::IncompatibleOperator`](crate::GenerateError::IncompatibleOperator)
    ///   for `like` on a non-text field or `in` on a non-collection field
    pub fn generate(
        &self,
        source: &EntityDescriptor,
        selections: &[FieldSelection],
        operation: OperationKind,
        target: &EntityDescriptor
    ) -> Result<String> {
        let dialect = self.dialect();
        debug!(
            %dialect,
            %operation,
            source = source.name(),
            target = target.name(),
            selected = selections.len(),
            "generating query"
        );

        let ctx = Context::new(source, target, selections, operation).inspect_err(|err| {
            debug!(%dialect, %operation, error = %err, "generation rejected");
        })?;

        let output = match self {
            Self::Specification(generator) => generator.render(&ctx),
            Self::Fluent(generator) => generator.render(&ctx),
            Self::Markup(generator) => generator.render(&ctx)
        };

        trace!(%dialect, bytes = output.len(), "query generated");
        Ok(output)
    }
}

impl From<Dialect> for Generator {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Specification => Self::Specification(SpecificationGenerator),
            Dialect::Fluent => Self::Fluent(FluentGenerator),
            Dialect::Markup => Self::Markup(MarkupGenerator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::GenerateError,
        model::{ConditionOperator, FieldDef}
    };

    fn entity() -> EntityDescriptor {
        EntityDescriptor::new("Item", "com.acme.Item")
            .with_field("title", "String")
            .with_field("labels", "Set<String>")
    }

    #[test]
    fn dialect_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(Generator::from(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn empty_selection_is_rejected_by_every_dialect() {
        for dialect in Dialect::ALL {
            let err = Generator::from(dialect)
                .generate(&entity(), &[], OperationKind::Select, &entity())
                .unwrap_err();
            assert_eq!(err, GenerateError::EmptySelection);
        }
    }

    #[test]
    fn incompatible_operator_is_rejected_by_every_dialect() {
        let selections = [FieldSelection::new(
            FieldDef::new("labels", "Set<String>"),
            ConditionOperator::Like
        )];
        for dialect in Dialect::ALL {
            for operation in OperationKind::ALL {
                let result =
                    Generator::from(dialect).generate(&entity(), &selections, operation, &entity());
                assert!(
                    matches!(result, Err(GenerateError::IncompatibleOperator { .. })),
                    "{dialect} {operation}"
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let selections = [
            FieldSelection::new(FieldDef::new("title", "String"), ConditionOperator::Like),
            FieldSelection::new(FieldDef::new("labels", "Set<String>"), ConditionOperator::In)
        ];
        for dialect in Dialect::ALL {
            let generator = Generator::from(dialect);
            let first = generator
                .generate(&entity(), &selections, OperationKind::Update, &entity())
                .unwrap();
            let second = generator
                .generate(&entity(), &selections, OperationKind::Update, &entity())
                .unwrap();
            assert_eq!(first, second);
        }
    }
}
