//! Cycle detection during normalization.
//!
//! Every object entered is counted in a [`VisitTracker`] keyed by its
//! [`ObjectId`]. Once an object's count reaches the configured limit,
//! entering it again is a circular reference: the registered
//! [`CircularReferenceHandler`] produces a replacement value, or the call
//! fails with [`Error::CircularReference`](crate::Error::CircularReference).
//!
//! With the default limit of 1 an object is normalized once and the first
//! re-entry is circular.

use pn_reflect::{Object, ObjectId, Value};
use pn_utils::hash::HashMap;
use serde::{Deserialize, Serialize};

/// The default number of times an object may be entered.
pub const DEFAULT_CIRCULAR_REFERENCE_LIMIT: usize = 1;

// -----------------------------------------------------------------------------
// CircularReferenceScope

/// Which visits count towards the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircularReferenceScope {
    /// Only the objects on the path from the root to the current object.
    ///
    /// An object referenced by several siblings is normalized in full for
    /// each of them; only a real cycle is reported.
    #[default]
    Path,
    /// Every visit during the call, including finished siblings.
    CallTree,
}

// -----------------------------------------------------------------------------
// CircularReferenceHandler

/// Produce a replacement value for a circular occurrence of an object.
///
/// Implemented for every `Fn(&dyn Object) -> Value`.
pub trait CircularReferenceHandler: Send + Sync {
    fn handle(&self, object: &dyn Object) -> Value;
}

impl<F> CircularReferenceHandler for F
where
    F: Fn(&dyn Object) -> Value + Send + Sync,
{
    #[inline]
    fn handle(&self, object: &dyn Object) -> Value {
        self(object)
    }
}

// -----------------------------------------------------------------------------
// VisitTracker

/// Visit counts per object, for one top-level call.
#[derive(Debug, Default, Clone)]
pub struct VisitTracker {
    counts: HashMap<ObjectId, usize>,
}

impl VisitTracker {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry into `id`.
    ///
    /// Returns `true` if the entry is circular, that is the object has
    /// already been entered `limit` times. A circular entry is not counted.
    pub fn enter(&mut self, id: ObjectId, limit: usize) -> bool {
        let count = self.counts.entry(id).or_insert(0);
        if *count >= limit {
            return true;
        }
        *count += 1;
        false
    }

    /// Release one entry into `id`.
    pub fn leave(&mut self, id: ObjectId) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&id);
            }
        }
    }

    #[inline]
    pub fn count(&self, id: ObjectId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Number of objects currently counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

// -----------------------------------------------------------------------------
// Tests
