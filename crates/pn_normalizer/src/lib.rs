//! Property-level normalization of reflected objects.
//!
//! [`PropertyNormalizer`] turns any `#[derive(Reflect)]` struct into a plain
//! [`Value`] tree by reading its fields directly, and rebuilds structs from
//! such trees through their constructor and field writes.
//!
//! ```
//! use pn_normalizer::{Context, PropertyNormalizer};
//! use pn_reflect::{Value, derive::Reflect};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Dummy {
//!     foo: String,
//!     bar: Option<String>,
//! }
//!
//! let normalizer = PropertyNormalizer::new();
//! let dummy = Dummy { foo: "foo".into(), bar: None };
//!
//! let data = normalizer.normalize(&dummy, Some("json"), Context::new()).unwrap();
//! assert_eq!(data.get("foo"), Some(&Value::from("foo")));
//! assert_eq!(data.get("bar"), Some(&Value::Null));
//!
//! let back: Dummy = normalizer.denormalize(data, None, Context::new()).unwrap();
//! assert_eq!(back, dummy);
//! ```
//!
//! ## Menu
//!
//! - [`PropertyNormalizer`]: the engine.
//! - [`Context`]: per-call options, such as the requested groups.
//! - [`name`]: attribute name translation.
//! - [`groups`]: group metadata and filtering.
//! - [`callback`]: per-attribute value transforms.
//! - [`circular`]: cycle detection.
//! - [`NormalizerConfig`]: serde-loadable settings.

// -----------------------------------------------------------------------------
// Modules

mod binder;
mod config;
mod context;
mod error;
mod normalizer;
mod serializer;

pub mod callback;
pub mod circular;
pub mod groups;
pub mod name;

// -----------------------------------------------------------------------------
// Exports

pub use binder::ConstructorBinder;
pub use config::{NameConverterConfig, NormalizerConfig};
pub use context::Context;
pub use error::{Error, Result};
pub use normalizer::PropertyNormalizer;
pub use serializer::Serializer;

pub use pn_reflect::{Mapping, Value};
