use core::any::{Any, TypeId};
use core::fmt;

use crate::{Denormalizer, Reflect, ReflectError, Value};

/// Borrow one attribute out of its owner, `None` if the owner has another type.
pub type AttributeGetter = fn(&dyn Any) -> Option<&dyn Reflect>;

/// Rebuild one attribute from a [`Value`] and store it into its owner.
pub type AttributeSetter = fn(&mut dyn Any, Value, &mut dyn Denormalizer) -> Result<(), ReflectError>;

/// A named data member of a reflected struct.
///
/// The accessors ignore field visibility: they are generated next to the
/// struct definition, where private fields are reachable.
#[derive(Clone)]
pub struct AttributeInfo {
    name: &'static str,
    index: usize,
    owner: &'static str,
    ty_id: TypeId,
    ty_path: &'static str,
    groups: &'static [&'static str],
    getter: AttributeGetter,
    setter: Option<AttributeSetter>,
}

impl AttributeInfo {
    /// Create a writable attribute holding a `T`.
    ///
    /// Index and owner are filled in by [`ObjectInfo::new`](crate::info::ObjectInfo::new).
    pub fn new<T: Any + ?Sized>(
        name: &'static str,
        getter: AttributeGetter,
        setter: AttributeSetter,
    ) -> Self {
        Self {
            name,
            index: 0,
            owner: "",
            ty_id: TypeId::of::<T>(),
            ty_path: core::any::type_name::<T>(),
            groups: &[],
            getter,
            setter: Some(setter),
        }
    }

    /// Create an attribute that can be read but never written.
    pub fn read_only<T: Any + ?Sized>(name: &'static str, getter: AttributeGetter) -> Self {
        Self {
            name,
            index: 0,
            owner: "",
            ty_id: TypeId::of::<T>(),
            ty_path: core::any::type_name::<T>(),
            groups: &[],
            getter,
            setter: None,
        }
    }

    /// Attach the serialization groups this attribute belongs to.
    #[inline]
    pub const fn with_groups(mut self, groups: &'static [&'static str]) -> Self {
        self.groups = groups;
        self
    }

    #[inline]
    pub(super) fn bind(&mut self, index: usize, owner: &'static str) {
        self.index = index;
        self.owner = owner;
    }

    /// The declared name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Position in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Type path of the declaring struct.
    #[inline]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// [`TypeId`] of the field type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty_path
    }

    #[inline]
    pub const fn groups(&self) -> &'static [&'static str] {
        self.groups
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    /// Borrow this attribute from `owner`.
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Result<&'a dyn Reflect, ReflectError> {
        (self.getter)(owner).ok_or_else(|| ReflectError::AttributeNotReadable {
            type_path: self.owner,
            attribute: self.name.into(),
        })
    }

    /// Rebuild this attribute from `value` and assign it on `owner`.
    pub fn set(
        &self,
        owner: &mut dyn Any,
        value: Value,
        de: &mut dyn Denormalizer,
    ) -> Result<(), ReflectError> {
        match self.setter {
            Some(setter) => setter(owner, value, de),
            None => Err(ReflectError::AttributeNotWritable {
                type_path: self.owner,
                attribute: self.name.into(),
            }),
        }
    }
}

impl fmt::Debug for AttributeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeInfo")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("owner", &self.owner)
            .field("type_path", &self.ty_path)
            .field("groups", &self.groups)
            .field("writable", &self.is_writable())
            .finish()
    }
}
