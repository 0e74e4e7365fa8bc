//! Visibility-agnostic attribute access on [`Object`]s.
//!
//! Attributes are listed from the object's own [`ObjectInfo`], which only
//! contains members declared on that struct. Embedded structs stay nested
//! attributes; their members are never flattened into the outer object.
//!
//! ```
//! use pn_reflect::{Object, Value, derive::Reflect};
//! # use pn_reflect::{Denormalizer, ReflectError, info::ObjectInfo};
//! # struct NoNesting;
//! # impl Denormalizer for NoNesting {
//! #     fn denormalize_object(&mut self, _: Value, info: &'static ObjectInfo)
//! #         -> Result<Box<dyn Object>, ReflectError> {
//! #         Err(ReflectError::NotInstantiable { type_path: info.type_path() })
//! #     }
//! # }
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Secret {
//!     code: u32,
//! }
//!
//! let mut secret = Secret::default();
//! let object: &mut dyn Object = &mut secret;
//! object.write("code", Value::from(7), &mut NoNesting).unwrap();
//! assert!(object.write("nope", Value::Null, &mut NoNesting).is_err());
//! assert_eq!(secret.code, 7);
//! ```
//!
//! [`ObjectInfo`]: crate::info::ObjectInfo

use core::any::Any;

use crate::info::AttributeInfo;
use crate::{Denormalizer, Object, Reflect, ReflectError, Value};

impl dyn Object {
    /// The attributes of this object in declaration order.
    #[inline]
    pub fn attributes(&self) -> &'static [AttributeInfo] {
        self.object_info().attributes()
    }

    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeInfo> {
        self.object_info().attribute(name)
    }

    /// Read an attribute, whatever its visibility.
    #[inline]
    pub fn read(&self, attribute: &AttributeInfo) -> Result<&dyn Reflect, ReflectError> {
        attribute.get(self as &dyn Any)
    }

    pub fn read_by_name(&self, name: &str) -> Result<&dyn Reflect, ReflectError> {
        match self.attribute(name) {
            Some(attribute) => self.read(attribute),
            None => Err(ReflectError::AttributeNotReadable {
                type_path: self.object_info().type_path(),
                attribute: name.to_owned().into(),
            }),
        }
    }

    /// Write an attribute, whatever its visibility.
    ///
    /// Fails with [`ReflectError::AttributeNotWritable`] when the type has
    /// no attribute named `name` or the attribute is read-only.
    pub fn write(
        &mut self,
        name: &str,
        value: Value,
        de: &mut dyn Denormalizer,
    ) -> Result<(), ReflectError> {
        let info = self.object_info();
        match info.attribute(name) {
            Some(attribute) => attribute.set(self as &mut dyn Any, value, de),
            None => Err(ReflectError::AttributeNotWritable {
                type_path: info.type_path(),
                attribute: name.to_owned().into(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
