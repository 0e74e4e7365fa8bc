use std::collections::BTreeMap;

use crate::circular::VisitTracker;

/// Options and bookkeeping for one normalize or denormalize call.
///
/// A fresh `Context` is passed to each top-level call. The same context is
/// threaded by `&mut` through every nested call, including calls through an
/// injected [`Serializer`](crate::Serializer), so visit counts survive
/// delegation.
///
/// ```
/// use pn_normalizer::Context;
///
/// let context = Context::new()
///     .with_groups(["admin", "public"])
///     .with_attribute("locale", "fr");
///
/// assert_eq!(context.groups().unwrap(), ["admin", "public"]);
/// assert_eq!(context.attribute("locale"), Some("fr"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Context {
    groups: Option<Vec<String>>,
    attributes: BTreeMap<String, String>,
    tracker: VisitTracker,
}

impl Context {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the call to attributes in at least one of `groups`.
    ///
    /// An empty list selects no grouped attribute at all, which differs
    /// from not requesting groups.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a free-form option for collaborators.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    #[inline]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[inline]
    pub fn tracker(&self) -> &VisitTracker {
        &self.tracker
    }

    #[inline]
    pub(crate) fn tracker_mut(&mut self) -> &mut VisitTracker {
        &mut self.tracker
    }
}
