//! Insertion-ordered containers, re-exports *indexmap*.

use crate::hash::FixedHashState;

/// An [`indexmap::IndexMap`] using [`FixedHashState`].
///
/// Iteration follows insertion order.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FixedHashState>;

pub use indexmap;
