//! Group-based attribute filtering.
//!
//! Group metadata comes from a [`MetadataProvider`]:
//!
//! - [`NoMetadata`]: no grouping at all, the default.
//! - [`DeclaredGroups`]: groups declared with `#[reflect(groups(...))]`.
//! - [`MetadataMap`]: groups registered at runtime per type path.
//!
//! When a call requests groups and the type has metadata, only attributes
//! in at least one requested group are kept. Attributes without any group
//! are then excluded.

use std::sync::{Arc, PoisonError, RwLock};

use pn_reflect::info::{AttributeInfo, ObjectInfo, TypePath};
use pn_utils::TypeIdMap;
use pn_utils::hash::{HashMap, HashSet};

// -----------------------------------------------------------------------------
// GroupSpec

/// The groups of each attribute of one type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GroupSpec {
    groups: HashMap<String, HashSet<String>>,
}

impl GroupSpec {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `attribute` to each of `groups`.
    pub fn with<I, S>(mut self, attribute: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(attribute, groups);
        self
    }

    pub fn insert<I, S>(&mut self, attribute: impl Into<String>, groups: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .entry(attribute.into())
            .or_default()
            .extend(groups.into_iter().map(Into::into));
    }

    /// The groups declared on a type's attributes, if any attribute has one.
    pub fn from_info(info: &ObjectInfo) -> Option<Self> {
        let mut spec = Self::new();
        for attribute in info.attributes() {
            if !attribute.groups().is_empty() {
                spec.insert(attribute.name(), attribute.groups().iter().copied());
            }
        }
        (!spec.is_empty()).then_some(spec)
    }

    #[inline]
    pub fn groups_of(&self, attribute: &str) -> Option<&HashSet<String>> {
        self.groups.get(attribute)
    }

    /// Returns `true` if `attribute` belongs to one of `requested`.
    pub fn allows(&self, attribute: &str, requested: &[String]) -> bool {
        self.groups_of(attribute)
            .is_some_and(|groups| requested.iter().any(|g| groups.contains(g.as_str())))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// -----------------------------------------------------------------------------
// filter

/// Narrow `attributes` to the requested groups, keeping declaration order.
///
/// Returns every attribute when there is no metadata or no group request.
pub fn filter<'a>(
    attributes: &'a [AttributeInfo],
    spec: Option<&GroupSpec>,
    requested: Option<&[String]>,
) -> Vec<&'a AttributeInfo> {
    match (spec, requested) {
        (Some(spec), Some(requested)) => attributes
            .iter()
            .filter(|attribute| spec.allows(attribute.name(), requested))
            .collect(),
        _ => attributes.iter().collect(),
    }
}

// -----------------------------------------------------------------------------
// MetadataProvider

/// Read-only source of per-type group metadata.
pub trait MetadataProvider: Send + Sync {
    /// The group metadata of a type, `None` if it is not grouped.
    fn group_spec(&self, info: &'static ObjectInfo) -> Option<Arc<GroupSpec>>;
}

/// No type has group metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMetadata;

impl MetadataProvider for NoMetadata {
    #[inline]
    fn group_spec(&self, _: &'static ObjectInfo) -> Option<Arc<GroupSpec>> {
        None
    }
}

/// Groups declared on fields with `#[reflect(groups("a", "b"))]`.
///
/// The [`GroupSpec`] of each type is built once and cached.
#[derive(Debug, Default)]
pub struct DeclaredGroups {
    cache: RwLock<TypeIdMap<Option<Arc<GroupSpec>>>>,
}

impl DeclaredGroups {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataProvider for DeclaredGroups {
    fn group_spec(&self, info: &'static ObjectInfo) -> Option<Arc<GroupSpec>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(spec) = cache.get(&info.type_id()) {
            return spec.clone();
        }
        drop(cache);

        let spec = GroupSpec::from_info(info).map(Arc::new);
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(info.type_id(), || spec.clone())
            .clone()
    }
}

/// Group metadata registered at runtime, keyed by type path.
///
/// ```
/// use pn_normalizer::groups::{GroupSpec, MetadataMap};
/// # use pn_reflect::derive::Reflect;
/// # #[derive(Reflect)]
/// # struct User { name: String }
///
/// let metadata = MetadataMap::new()
///     .with::<User>(GroupSpec::new().with("name", ["public"]));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MetadataMap {
    specs: HashMap<String, Arc<GroupSpec>>,
}

impl MetadataMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the groups of `T`.
    pub fn with<T: TypePath>(mut self, spec: GroupSpec) -> Self {
        self.insert(T::type_path(), spec);
        self
    }

    pub fn insert(&mut self, type_path: impl Into<String>, spec: GroupSpec) {
        self.specs.insert(type_path.into(), Arc::new(spec));
    }
}

impl MetadataProvider for MetadataMap {
    #[inline]
    fn group_spec(&self, info: &'static ObjectInfo) -> Option<Arc<GroupSpec>> {
        self.specs.get(info.type_path()).cloned()
    }
}

// -----------------------------------------------------------------------------
// Tests
