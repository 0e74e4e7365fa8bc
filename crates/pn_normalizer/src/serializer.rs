use pn_reflect::info::ObjectInfo;
use pn_reflect::{Object, Reflect, Value};

use crate::{Context, Result};

/// A collaborator that normalizes and denormalizes nested values.
///
/// When a [`PropertyNormalizer`](crate::PropertyNormalizer) has a serializer,
/// every non-scalar attribute value is handed to it instead of being
/// normalized in place, and nested objects are built through it. The
/// [`Context`] of the running call is passed along and must be passed back
/// for cycle detection to keep working.
///
/// `PropertyNormalizer` implements this trait itself, so normalizers can be
/// chained.
pub trait Serializer: Send + Sync {
    fn normalize(&self, value: &dyn Reflect, format: Option<&str>, context: &mut Context) -> Result<Value>;

    fn denormalize(
        &self,
        data: Value,
        info: &'static ObjectInfo,
        format: Option<&str>,
        context: &mut Context,
    ) -> Result<Box<dyn Object>>;
}
