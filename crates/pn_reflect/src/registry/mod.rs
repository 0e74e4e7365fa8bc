//! Lookup of reflected struct descriptors by type path.
//!
//! - [`TypeMeta`]: a registered type and its [`ObjectInfo`].
//! - [`TypeRegistry`]: the store, indexed by [`TypeId`], full type path
//!   and short type name.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! We use the [`inventory`] crate to implement static registration, and
//! not every platform supports it. Where it is unsupported the method
//! returns `false` without raising any error.
//!
//! [`ObjectInfo`]: crate::info::ObjectInfo
//! [`TypeId`]: core::any::TypeId
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::TypeMeta;
pub use type_registry::TypeRegistry;
