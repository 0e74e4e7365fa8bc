//! Shared containers for the `pn_*` crates.
//!
//! - [`hash`]: `hashbrown` containers with fixed `foldhash` seeds.
//! - [`index`]: insertion-ordered containers.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId).
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;
pub mod index;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
