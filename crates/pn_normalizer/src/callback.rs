//! Per-attribute value transforms applied during normalization.
//!
//! A callback receives the raw attribute value, before any normalization,
//! and its result is used verbatim. It may return anything, `Value::Null`
//! included.

use std::sync::Arc;

use pn_reflect::{Reflect, Value};
use pn_utils::hash::HashMap;

use crate::{Error, Result};

/// A transform of one attribute's raw value.
///
/// Implemented for every `Fn(&dyn Reflect) -> Value`.
pub trait AttributeCallback: Send + Sync {
    fn call(&self, value: &dyn Reflect) -> Value;
}

impl<F> AttributeCallback for F
where
    F: Fn(&dyn Reflect) -> Value + Send + Sync,
{
    #[inline]
    fn call(&self, value: &dyn Reflect) -> Value {
        self(value)
    }
}

/// Callbacks keyed by declared attribute name.
///
/// An entry may be registered as not callable; reaching that attribute
/// then fails with [`Error::InvalidCallback`].
///
/// ```
/// use pn_normalizer::callback::CallbackMap;
/// use pn_reflect::Value;
///
/// let callbacks = CallbackMap::new()
///     .with("password", |_: &dyn pn_reflect::Reflect| Value::from("***"));
///
/// let raw = String::from("hunter2");
/// let masked = callbacks.apply("password", &raw).unwrap().unwrap();
/// assert_eq!(masked, Value::from("***"));
/// assert!(callbacks.apply("login", &raw).is_none());
/// ```
#[derive(Default, Clone)]
pub struct CallbackMap {
    callbacks: HashMap<String, Option<Arc<dyn AttributeCallback>>>,
}

impl CallbackMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: impl Into<String>, callback: impl AttributeCallback + 'static) -> Self {
        self.insert(attribute, callback);
        self
    }

    /// Register `callback` for `attribute`, replacing any previous one.
    pub fn insert(&mut self, attribute: impl Into<String>, callback: impl AttributeCallback + 'static) {
        self.callbacks.insert(attribute.into(), Some(Arc::new(callback)));
    }

    /// Register a placeholder that cannot be invoked.
    pub fn insert_uncallable(&mut self, attribute: impl Into<String>) {
        self.callbacks.insert(attribute.into(), None);
    }

    #[inline]
    pub fn remove(&mut self, attribute: &str) -> bool {
        self.callbacks.remove(attribute).is_some()
    }

    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        self.callbacks.contains_key(attribute)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run the callback of `attribute` on `raw`.
    ///
    /// `None` when no callback is registered, so the caller normalizes the
    /// value itself.
    pub fn apply(&self, attribute: &str, raw: &dyn Reflect) -> Option<Result<Value>> {
        let entry = self.callbacks.get(attribute)?;
        Some(match entry {
            Some(callback) => Ok(callback.call(raw)),
            None => Err(Error::InvalidCallback {
                attribute: attribute.to_owned(),
            }),
        })
    }
}

impl core::fmt::Debug for CallbackMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.callbacks.iter().map(|(k, v)| (k, v.is_some())))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
