//! Attribute name translation.
//!
//! A [`NameConverter`] maps declared attribute names to the external names
//! used in normalized data, and back. It is a pure function pair: the same
//! input always gives the same output.
//!
//! When denormalizing, an incoming key is first matched against the
//! declared names as-is, then against their [`NameConverter::normalize`]
//! forms, then through [`NameConverter::denormalize`]. Case conversions
//! are not exact inverses (`address_line_1` becomes `addressLine1`, which
//! converts back to `address_line1`), so the forward match comes first.

use std::borrow::Cow;

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use pn_utils::hash::HashSet;

/// Translate attribute names between their declared and external forms.
pub trait NameConverter: Send + Sync {
    /// Declared name to external name.
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str>;

    /// External name to declared name.
    fn denormalize<'a>(&self, name: &'a str) -> Cow<'a, str>;
}

// -----------------------------------------------------------------------------
// IdentityConverter

/// Keep names unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityConverter;

impl NameConverter for IdentityConverter {
    #[inline]
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }

    #[inline]
    fn denormalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }
}

// -----------------------------------------------------------------------------
// CamelCaseToSnakeCase

/// camelCase declared names, snake_case external names.
///
/// With an attribute list only the listed attributes are converted; the
/// list holds the snake_case forms.
///
/// ```
/// use pn_normalizer::name::{CamelCaseToSnakeCase, NameConverter};
///
/// let all = CamelCaseToSnakeCase::new();
/// assert_eq!(all.normalize("kevinDunglas"), "kevin_dunglas");
/// assert_eq!(all.denormalize("kevin_dunglas"), "kevinDunglas");
///
/// let some = CamelCaseToSnakeCase::with_attributes(["foo_bar"]);
/// assert_eq!(some.normalize("fooBar"), "foo_bar");
/// assert_eq!(some.normalize("kevinDunglas"), "kevinDunglas");
/// ```
#[derive(Debug, Clone)]
pub struct CamelCaseToSnakeCase {
    attributes: Option<HashSet<String>>,
    lower_camel_case: bool,
}

impl Default for CamelCaseToSnakeCase {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl CamelCaseToSnakeCase {
    /// Convert every attribute.
    #[inline]
    pub fn new() -> Self {
        Self {
            attributes: None,
            lower_camel_case: true,
        }
    }

    /// Convert only the listed attributes, given in snake_case.
    pub fn with_attributes<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: Some(attributes.into_iter().map(Into::into).collect()),
            lower_camel_case: true,
        }
    }

    /// Declared names are `UpperCamelCase` rather than `lowerCamelCase`.
    #[inline]
    pub fn upper_camel_case(mut self) -> Self {
        self.lower_camel_case = false;
        self
    }

    #[inline]
    fn is_listed(&self, snake: &str) -> bool {
        self.attributes.as_ref().is_none_or(|list| list.contains(snake))
    }
}

impl NameConverter for CamelCaseToSnakeCase {
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let snake = name.to_snake_case();
        if self.is_listed(&snake) {
            Cow::Owned(snake)
        } else {
            Cow::Borrowed(name)
        }
    }

    fn denormalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if !self.is_listed(name) {
            return Cow::Borrowed(name);
        }
        if self.lower_camel_case {
            Cow::Owned(name.to_lower_camel_case())
        } else {
            Cow::Owned(name.to_upper_camel_case())
        }
    }
}

// -----------------------------------------------------------------------------
// SnakeCaseToCamelCase

/// snake_case declared names, lowerCamelCase external names.
///
/// The usual choice for Rust structs exchanged with camelCase formats.
///
/// ```
/// use pn_normalizer::name::{NameConverter, SnakeCaseToCamelCase};
///
/// let names = SnakeCaseToCamelCase::new();
/// assert_eq!(names.normalize("created_at"), "createdAt");
/// assert_eq!(names.denormalize("createdAt"), "created_at");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SnakeCaseToCamelCase {
    attributes: Option<HashSet<String>>,
}

impl SnakeCaseToCamelCase {
    #[inline]
    pub fn new() -> Self {
        Self { attributes: None }
    }

    /// Convert only the listed attributes, given in snake_case.
    pub fn with_attributes<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: Some(attributes.into_iter().map(Into::into).collect()),
        }
    }

    #[inline]
    fn is_listed(&self, snake: &str) -> bool {
        self.attributes.as_ref().is_none_or(|list| list.contains(snake))
    }
}

impl NameConverter for SnakeCaseToCamelCase {
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.is_listed(name) {
            Cow::Owned(name.to_lower_camel_case())
        } else {
            Cow::Borrowed(name)
        }
    }

    fn denormalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let snake = name.to_snake_case();
        if self.is_listed(&snake) {
            Cow::Owned(snake)
        } else {
            Cow::Borrowed(name)
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CamelCaseToSnakeCase, IdentityConverter, NameConverter, SnakeCaseToCamelCase};

    #[test]
    fn identity() {
        assert_eq!(IdentityConverter.normalize("fooBar"), "fooBar");
        assert_eq!(IdentityConverter.denormalize("foo_bar"), "foo_bar");
    }

    #[test]
    fn restricted_camel_to_snake() {
        let names = CamelCaseToSnakeCase::with_attributes(["kevin_dunglas"]);
        assert_eq!(names.normalize("kevinDunglas"), "kevin_dunglas");
        assert_eq!(names.normalize("fooBar"), "fooBar");
        assert_eq!(names.normalize("bar_foo"), "bar_foo");

        assert_eq!(names.denormalize("kevin_dunglas"), "kevinDunglas");
        assert_eq!(names.denormalize("foo_bar"), "foo_bar");
    }

    #[test]
    fn upper_camel() {
        let names = CamelCaseToSnakeCase::new().upper_camel_case();
        assert_eq!(names.normalize("CamelCase"), "camel_case");
        assert_eq!(names.denormalize("camel_case"), "CamelCase");
    }

    #[test]
    fn restricted_snake_to_camel() {
        let names = SnakeCaseToCamelCase::with_attributes(["first_name"]);
        assert_eq!(names.normalize("first_name"), "firstName");
        assert_eq!(names.normalize("last_name"), "last_name");
        assert_eq!(names.denormalize("firstName"), "first_name");
        assert_eq!(names.denormalize("lastName"), "lastName");
    }
}
