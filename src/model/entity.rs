// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity and field descriptors.

use super::category::{FieldCategory, categorize};

/// A single declared field: its name and the name of its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    /// Field name as used by accessors and placeholders (e.g., `userName`).
    pub name: String,

    /// Declared type name as written in the source (e.g., `List<Long>`).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub declared_type: String
}

impl FieldDef {
    /// Create a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            declared_type: declared_type.into()
        }
    }

    /// Get the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared type name.
    #[must_use]
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// Semantic category derived from the declared type.
    #[must_use]
    pub fn category(&self) -> FieldCategory {
        categorize(&self.declared_type)
    }
}

/// Read-only description of an entity: its names and declared fields.
///
/// Used for both sides of a generation request. The *source* entity is the
/// parameter object whose values drive the query; the *target* entity is the
/// persisted type whose columns the query reads or writes.
///
/// # Construction
///
/// ```
/// use querysmith::EntityDescriptor;
///
/// let user = EntityDescriptor::new("User", "com.acme.domain.User")
///     .with_field("id", "Long")
///     .with_field("userName", "String")
///     .with_field("roles", "Set<String>");
///
/// assert_eq!(user.fields().len(), 3);
/// assert!(user.has_field("roles"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityDescriptor {
    /// Simple type name (e.g., `User`).
    pub name: String,

    /// Fully-qualified type name (e.g., `com.acme.domain.User`).
    #[cfg_attr(feature = "serde", serde(rename = "qualified"))]
    pub qualified_name: String,

    /// Declared fields in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDef>
}

impl EntityDescriptor {
    /// Create a descriptor without fields.
    #[must_use]
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            name:           name.into(),
            qualified_name: qualified_name.into(),
            fields:         Vec::new()
        }
    }

    /// Append a declared field.
    ///
    /// A field whose name is already declared replaces the earlier
    /// declaration in place, so the field list stays an ordered set.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let field = FieldDef::new(name, declared_type);
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field)
        }
        self
    }

    /// Get the simple type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the fully-qualified type name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// All declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Look up a declared field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether a field with this exact name is declared.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Pick the default target column for a source field name.
    ///
    /// Selection front-ends use this to pre-fill a field's target column:
    ///
    /// 1. a declared field whose name matches case-insensitively
    /// 2. otherwise the first declared field
    /// 3. otherwise an empty string
    ///
    /// # Examples
    ///
    /// ```
    /// use querysmith::EntityDescriptor;
    ///
    /// let user = EntityDescriptor::new("User", "com.acme.User")
    ///     .with_field("id", "Long")
    ///     .with_field("userName", "String");
    ///
    /// assert_eq!(user.resolve_column("USERNAME"), "userName");
    /// assert_eq!(user.resolve_column("email"), "id");
    /// assert_eq!(EntityDescriptor::default().resolve_column("id"), "");
    /// ```
    #[must_use]
    pub fn resolve_column(&self, field_name: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field_name))
            .or_else(|| self.fields.first())
            .map(|f| f.name.clone())
            .unwrap_or_default()
    }
}
