use core::any::{Any, TypeId};
use core::cell::Ref;
use core::fmt;

use crate::info::ObjectInfo;
use crate::{ReflectError, Value};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose shape can be inspected at runtime.
///
/// Scalars and plain data report themselves as a [`ReflectRef::Value`],
/// containers expose their elements, smart pointers forward to their pointee
/// and derived structs report themselves as an [`Object`].
///
/// Implemented for most standard types in [`impls`](crate::impls) and by
/// `#[derive(Reflect)]` for structs.
pub trait Reflect: Any {
    /// Borrow the reflected view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// The full path of the concrete type, such as `alloc::string::String`.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Convert a scalar value to [`Value`], if it is one.
    fn to_value(&self) -> Option<Value> {
        match self.reflect_ref() {
            ReflectRef::Value(value) => Some(value),
            ReflectRef::Borrowed(inner) => inner.to_value(),
            ReflectRef::Owned(inner) => inner.to_value(),
            _ => None,
        }
    }
}

/// The runtime shape of a reflected value.
pub enum ReflectRef<'a> {
    /// A scalar or prebuilt plain value.
    Value(Value),
    /// A struct with named attributes.
    Object(&'a dyn Object),
    /// An ordered sequence.
    List(Vec<&'a dyn Reflect>),
    /// A string-keyed map, in iteration order.
    Map(Vec<(&'a str, &'a dyn Reflect)>),
    /// A value behind a runtime borrow, such as a `RefCell`.
    Borrowed(Ref<'a, dyn Reflect>),
    /// A temporary owner of a shared value, such as an upgraded `Weak`.
    Owned(Box<dyn Reflect>),
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Object(o) => f.debug_tuple("Object").field(&o.reflect_type_path()).finish(),
            Self::List(l) => f.debug_tuple("List").field(&l.len()).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(&m.len()).finish(),
            Self::Borrowed(b) => f.debug_tuple("Borrowed").field(&b.reflect_type_path()).finish(),
            Self::Owned(o) => f.debug_tuple("Owned").field(&o.reflect_type_path()).finish(),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Reflect({})", self.reflect_type_path())
    }
}

// -----------------------------------------------------------------------------
// Object

/// A reflected struct with named attributes.
///
/// See [`access`](crate::access) for the attribute operations.
pub trait Object: Reflect {
    /// The static descriptor of this object's type.
    fn object_info(&self) -> &'static ObjectInfo;
}

impl dyn Object {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Move the boxed object out as a `T`.
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, ReflectError> {
        let found = self.reflect_type_path();
        let any: Box<dyn Any> = self;
        any.downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ReflectError::MismatchedType {
                expected: core::any::type_name::<T>(),
                found,
            })
    }
}

impl fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Object({})", self.reflect_type_path())
    }
}

// -----------------------------------------------------------------------------
// ObjectId

/// The identity of an object in a graph: its concrete type and its address.
///
/// The type takes part in the key because a struct and its first field may
/// share one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    type_id: TypeId,
    addr: usize,
}

impl ObjectId {
    #[inline]
    pub fn of(object: &dyn Object) -> Self {
        Self {
            type_id: (object as &dyn Any).type_id(),
            addr: object as *const dyn Object as *const () as usize,
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

// -----------------------------------------------------------------------------
// Tests
