// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Types that describe themselves as entities.

use crate::model::EntityDescriptor;

/// A type that can produce its own [`EntityDescriptor`].
///
/// Usually derived with `#[derive(Describe)]`; fields are listed in
/// declaration order.
///
/// # Example
///
/// ```
/// use querysmith::Describe;
///
/// #[derive(Describe)]
/// #[describe(name = "UserForm", qualified = "com.acme.UserForm")]
/// struct Form {
///     user_name: String,
///     #[describe(skip)]
///     csrf:      String,
///     tag_ids:   Vec<i64>
/// }
///
/// let descriptor = Form::descriptor();
/// assert_eq!(descriptor.name(), "UserForm");
/// assert_eq!(descriptor.fields()[0].name(), "userName");
/// assert_eq!(descriptor.fields()[1].declared_type(), "List<Long>");
/// assert_eq!(descriptor.fields().len(), 2);
/// ```
pub trait Describe {
    /// Descriptor of this type.
    fn descriptor() -> EntityDescriptor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    #[derive(querysmith_derive::Describe)]
    #[describe(qualified = "com.acme.Order")]
    struct Order {
        id:          i64,
        customer_id: Option<i64>,
        note:        Option<String>,
        #[describe(type_name = "BigDecimal")]
        total:       f64
    }

    #[test]
    fn derived_descriptor() {
        let descriptor = Order::descriptor();
        assert_eq!(descriptor.name(), "Order");
        assert_eq!(descriptor.qualified_name(), "com.acme.Order");

        let fields: Vec<_> = descriptor
            .fields()
            .iter()
            .map(|f| (f.name(), f.declared_type()))
            .collect();
        assert_eq!(
            fields,
            [
                ("id", "Long"),
                ("customerId", "Long"),
                ("note", "String"),
                ("total", "BigDecimal")
            ]
        );
    }

    #[test]
    fn default_qualified_name_uses_module_path() {
        #[allow(dead_code)]
        #[derive(querysmith_derive::Describe)]
        struct Tag {
            label: String
        }

        assert_eq!(Tag::descriptor().qualified_name(), concat!(module_path!(), "::Tag"));
    }
}
