use crate::info::ObjectInfo;
use crate::{Object, ReflectError, Value};

/// Rebuild a typed value from plain data.
///
/// Scalars convert strictly: a `Value::String` never becomes a number and
/// `Value::Null` is only accepted by `Option`, `()` and `Value`. Integers
/// are accepted where floats are expected.
///
/// Nested reflected structs are delegated to the [`Denormalizer`], which
/// decides how objects are instantiated and populated.
pub trait FromValue: Sized {
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError>;
}

/// The object-building half of denormalization.
///
/// `FromValue` for a derived struct forwards its data here together with
/// the struct's [`ObjectInfo`], and downcasts the returned object.
pub trait Denormalizer {
    fn denormalize_object(
        &mut self,
        data: Value,
        info: &'static ObjectInfo,
    ) -> Result<Box<dyn Object>, ReflectError>;
}
