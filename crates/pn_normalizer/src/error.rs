use std::error::Error as StdError;

use pn_reflect::ReflectError;

/// Result type alias for normalizer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures that abort a normalize or denormalize call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An object was reached more often than the circular reference limit
    /// allows and no handler is registered.
    #[error("a circular reference has been detected on `{type_path}` (configured limit: {limit})")]
    CircularReference { type_path: &'static str, limit: usize },

    /// The callback registered for an attribute cannot be invoked.
    #[error("the callback registered for attribute `{attribute}` is not callable")]
    InvalidCallback { attribute: String },

    /// A type path did not resolve in the type registry.
    #[error("unknown type `{type_path}`")]
    UnknownType { type_path: String },

    /// Reading, writing or rebuilding a value failed.
    #[error(transparent)]
    Reflect(ReflectError),

    /// An injected serializer failed.
    #[error("serializer error: {0}")]
    Serializer(Box<dyn StdError + Send + Sync>),
}

impl Error {
    /// Wrap the failure of an injected serializer.
    #[inline]
    pub fn serializer(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Serializer(error.into())
    }
}

/// Errors crossing a nested `FromValue` call travel as
/// [`ReflectError::Custom`] and are unwrapped here.
impl From<ReflectError> for Error {
    fn from(error: ReflectError) -> Self {
        match error {
            ReflectError::Custom(inner) => match inner.downcast::<Error>() {
                Ok(error) => *error,
                Err(inner) => Error::Reflect(ReflectError::Custom(inner)),
            },
            other => Error::Reflect(other),
        }
    }
}

impl From<Error> for ReflectError {
    fn from(error: Error) -> Self {
        match error {
            Error::Reflect(inner) => inner,
            other => ReflectError::custom(other),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
