use core::cell::{Ref, RefCell};
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::{Denormalizer, FromValue, Reflect, ReflectError, ReflectRef, Value};

macro_rules! impl_reflect_deref {
    ($($ptr:ident),*) => {$(
        impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                (**self).reflect_ref()
            }

            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                (**self).reflect_type_path()
            }
        }

        impl<T: FromValue> FromValue for $ptr<T> {
            #[inline]
            fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
                T::from_value(value, de).map($ptr::new)
            }
        }
    )*};
}

impl_reflect_deref!(Box, Rc, Arc);

impl<T: Reflect> Reflect for RefCell<T> {
    /// A value that is mutably borrowed elsewhere reflects as `null`.
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self.try_borrow() {
            Ok(guard) => ReflectRef::Borrowed(Ref::map(guard, |v| v as &dyn Reflect)),
            Err(_) => ReflectRef::Value(Value::Null),
        }
    }

    fn reflect_type_path(&self) -> &'static str {
        match self.try_borrow() {
            Ok(guard) => guard.reflect_type_path(),
            Err(_) => core::any::type_name::<T>(),
        }
    }
}

impl<T: FromValue> FromValue for RefCell<T> {
    #[inline]
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        T::from_value(value, de).map(RefCell::new)
    }
}

macro_rules! impl_reflect_weak {
    ($($weak:ty),*) => {$(
        impl<T: Reflect + ?Sized> Reflect for $weak {
            /// A dropped referent reflects as `null`.
            fn reflect_ref(&self) -> ReflectRef<'_> {
                match self.upgrade() {
                    Some(strong) => ReflectRef::Owned(Box::new(strong)),
                    None => ReflectRef::Value(Value::Null),
                }
            }
        }

        /// Only `null` can be rebuilt, into an empty reference.
        impl<T> FromValue for $weak {
            fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
                match value {
                    Value::Null => Ok(<$weak>::new()),
                    other => Err(ReflectError::invalid::<Self>(&other)),
                }
            }
        }
    )*};
}

impl_reflect_weak!(rc::Weak<T>, sync::Weak<T>);

// -----------------------------------------------------------------------------
// Tests
