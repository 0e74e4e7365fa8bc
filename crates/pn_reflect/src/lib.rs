//! Descriptor-table reflection for the property normalizer.
//!
//! `#[derive(Reflect)]` generates, for every struct, a static [`ObjectInfo`]
//! listing its attributes in declaration order together with accessor
//! functions that read and write each field regardless of its visibility.
//!
//! ## Menu
//!
//! - [`Value`]: the format-neutral data tree produced by normalization.
//! - [`Reflect`] / [`Object`]: runtime access to any reflected value.
//! - [`FromValue`]: rebuild a typed value from a [`Value`].
//! - [`info`]: static type descriptors.
//! - [`access`]: visibility-agnostic attribute read and write.
//! - [`registry`]: lookup of descriptors by type path.
//!
//! ```
//! use pn_reflect::{Value, derive::Reflect, info::Typed};
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let info = Point::type_info();
//! assert_eq!(info.len(), 2);
//! assert_eq!(info.attribute_at(1).unwrap().name(), "y");
//!
//! let p = Point { x: 1, y: 2 };
//! let object: &dyn pn_reflect::Object = &p;
//! let x = object.read_by_name("x").unwrap();
//! assert_eq!(x.to_value(), Some(Value::Int(1)));
//! ```
//!
//! [`ObjectInfo`]: crate::info::ObjectInfo

// -----------------------------------------------------------------------------
// Extern Self

// Generated code always names this crate `pn_reflect`, doc tests included.
extern crate self as pn_reflect;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod from_value;
mod reflection;
mod value;

pub mod access;
pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use error::ReflectError;
pub use from_value::{Denormalizer, FromValue};
pub use pn_reflect_derive as derive;
pub use reflection::{Object, ObjectId, Reflect, ReflectRef};
pub use value::{Mapping, Value};
