use std::borrow::Cow;
use std::error::Error;

use thiserror::Error;

/// An error raised while reading, writing or rebuilding reflected values.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// The type has no attribute with the given name, or the attribute
    /// refuses writes.
    #[error("attribute `{attribute}` is not writable on `{type_path}`")]
    AttributeNotWritable {
        type_path: &'static str,
        attribute: Cow<'static, str>,
    },
    /// The getter of an attribute was invoked on a value of another type.
    #[error("attribute `{attribute}` is not readable on `{type_path}`")]
    AttributeNotReadable {
        type_path: &'static str,
        attribute: Cow<'static, str>,
    },
    /// A [`Value`](crate::Value) of the wrong kind was supplied for a type.
    #[error("expected `{expected}`, found {found} value")]
    InvalidValue {
        expected: &'static str,
        found: &'static str,
    },
    /// The type has neither a constructor nor a default instance.
    #[error("`{type_path}` has no constructor and no default instance")]
    NotInstantiable { type_path: &'static str },
    /// A boxed object could not be downcast to the requested type.
    #[error("mismatched type: expected `{expected}`, found `{found}`")]
    MismatchedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Custom(Box<dyn Error + Send + Sync>),
}

impl ReflectError {
    /// Wrap any error into [`ReflectError::Custom`].
    #[inline]
    pub fn custom(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Custom(error.into())
    }

    #[inline]
    pub(crate) fn invalid<T: ?Sized>(found: &crate::Value) -> Self {
        Self::InvalidValue {
            expected: core::any::type_name::<T>(),
            found: found.kind(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
