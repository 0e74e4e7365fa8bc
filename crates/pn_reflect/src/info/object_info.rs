use core::any::{Any, TypeId};
use core::fmt;
use std::sync::OnceLock;

use pn_utils::hash::HashMap;

use crate::info::{AttributeInfo, ConstructorInfo, Typed};
use crate::{Object, ReflectError};

// -----------------------------------------------------------------------------
// ObjectInfo

/// A container for the compile-time layout of a reflected struct.
///
/// # Examples
///
/// ```rust
/// use pn_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(constructor = new(name))]
/// struct User {
///     name: String,
///     #[reflect(groups("admin"))]
///     email: Option<String>,
/// }
///
/// impl User {
///     fn new(name: String) -> Self {
///         Self { name, email: None }
///     }
/// }
///
/// let info = User::type_info();
///
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.index_of("email"), Some(1));
/// assert_eq!(info.attribute("email").unwrap().groups(), ["admin"]);
/// assert_eq!(info.constructor().unwrap().params()[0].name(), "name");
/// assert!(info.is_instantiable());
/// ```
pub struct ObjectInfo {
    type_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    attributes: Box<[AttributeInfo]>,
    indices: HashMap<&'static str, usize>,
    constructor: Option<ConstructorInfo>,
    default_fn: Option<fn() -> Box<dyn Object>>,
}

impl ObjectInfo {
    /// Create a new [`ObjectInfo`].
    ///
    /// The order of attributes is fixed, depends on the input order.
    pub fn new<T: Typed>(attributes: Vec<AttributeInfo>) -> Self {
        let type_path = T::type_path();
        let mut attributes = attributes.into_boxed_slice();
        let mut indices = HashMap::with_capacity_and_hasher(attributes.len(), Default::default());
        for (index, attribute) in attributes.iter_mut().enumerate() {
            attribute.bind(index, type_path);
            indices.insert(attribute.name(), index);
        }

        Self {
            type_id: TypeId::of::<T>(),
            type_path,
            type_name: T::type_name(),
            attributes,
            indices,
            constructor: None,
            default_fn: None,
        }
    }

    #[inline]
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Provide a way to build a default instance, used when there is no
    /// constructor or as the base for attribute writes.
    #[inline]
    pub fn with_default(mut self, default_fn: fn() -> Box<dyn Object>) -> Self {
        self.default_fn = Some(default_fn);
        self
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attributes in declaration order.
    #[inline]
    pub fn attributes(&self) -> &[AttributeInfo] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.get(*self.indices.get(name)?)
    }

    #[inline]
    pub fn attribute_at(&self, index: usize) -> Option<&AttributeInfo> {
        self.attributes.get(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn constructor(&self) -> Option<&ConstructorInfo> {
        self.constructor.as_ref()
    }

    #[inline]
    pub fn has_default(&self) -> bool {
        self.default_fn.is_some()
    }

    #[inline]
    pub fn is_instantiable(&self) -> bool {
        self.constructor.is_some() || self.default_fn.is_some()
    }

    /// Build a default instance.
    pub fn instantiate_default(&self) -> Result<Box<dyn Object>, ReflectError> {
        match self.default_fn {
            Some(default_fn) => Ok(default_fn()),
            None => Err(ReflectError::NotInstantiable {
                type_path: self.type_path,
            }),
        }
    }
}

impl fmt::Debug for ObjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectInfo")
            .field("type_path", &self.type_path)
            .field("attributes", &self.attributes)
            .field("constructor", &self.constructor)
            .field("has_default", &self.has_default())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ObjectInfoCell

/// Static storage for the [`ObjectInfo`] of a non-generic type.
///
/// ```ignore
/// impl Typed for Foo {
///     fn type_info() -> &'static ObjectInfo {
///         static CELL: ObjectInfoCell = ObjectInfoCell::new();
///         CELL.get_or_init(|| ObjectInfo::new::<Self>(vec![ /* ... */ ]))
///     }
/// }
/// ```
pub struct ObjectInfoCell(OnceLock<ObjectInfo>);

impl ObjectInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the [`ObjectInfo`] stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> ObjectInfo) -> &ObjectInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// Tests
