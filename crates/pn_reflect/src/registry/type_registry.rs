use core::any::TypeId;

use pn_utils::TypeIdMap;
use pn_utils::hash::{HashMap, HashSet};

use crate::info::{ObjectInfo, Typed};
use crate::registry::TypeMeta;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected structs.
///
/// Used to resolve a type path received at runtime to the static
/// [`ObjectInfo`] needed for denormalization.
///
/// # Example
///
/// ```
/// use pn_reflect::{derive::Reflect, registry::TypeRegistry};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "demo::Point")]
/// struct Point {
///     x: f32,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Point>();
///
/// let info = registry.get_with_type_path("demo::Point").unwrap().info();
/// assert_eq!(info.type_name(), "Point");
/// assert!(registry.get_with_type_name("Point").is_some());
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    auto_registered: bool,
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(&mut self, meta: &TypeMeta) {
        let type_name = meta.type_name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, meta.type_id());
            }
        }

        self.type_path_to_id.insert(meta.type_path(), meta.type_id());
    }

    /// Add a [`TypeMeta`] if its type is not registered yet.
    ///
    /// Returns `false` if the type was already present.
    pub fn try_insert_type_meta(&mut self, meta: TypeMeta) -> bool {
        if self.type_meta_table.contains(&meta.type_id()) {
            return false;
        }
        self.add_new_type_indices(&meta);
        self.type_meta_table.insert(meta.type_id(), meta);
        true
    }

    /// Register the type `T` if it has not been registered already.
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.try_insert_type_meta(TypeMeta::of::<T>());
    }

    /// Registers all non-generic types annotated with `#[reflect(auto_register)]`.
    ///
    /// Equivalent to calling [`register`](Self::register) for each of them.
    /// Repeated calls are cheap.
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Without the `auto_register` feature this does nothing and
    /// returns `false`.
    ///
    /// ```no_run
    /// # use pn_reflect::{derive::Reflect, registry::TypeRegistry};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default, auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(core::any::TypeId::of::<Foo>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Look up a type by its full path, such as `my_crate::model::User`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        self.get(*self.type_path_to_id.get(type_path)?)
    }

    /// Look up a type by its short name, such as `User`.
    ///
    /// Returns `None` if the name is shared by several registered types,
    /// see [`is_ambiguous`](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        self.get(*self.type_name_to_id.get(type_name)?)
    }

    /// Returns `true` if `type_name` is shared by several registered types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`ObjectInfo`] registered for a [`TypeId`].
    #[inline]
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static ObjectInfo> {
        self.get(type_id).map(TypeMeta::info)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns an iterator over the registered types.
    pub fn iter(&self) -> impl Iterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
