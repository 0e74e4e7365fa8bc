use core::any::TypeId;

use crate::info::{ObjectInfo, Typed};

/// A registry entry: one reflected struct.
#[derive(Debug, Clone, Copy)]
pub struct TypeMeta {
    info: &'static ObjectInfo,
}

impl TypeMeta {
    #[inline]
    pub fn of<T: Typed>() -> Self {
        Self {
            info: T::type_info(),
        }
    }

    #[inline]
    pub const fn from_info(info: &'static ObjectInfo) -> Self {
        Self { info }
    }

    #[inline]
    pub const fn info(&self) -> &'static ObjectInfo {
        self.info
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.info.type_id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.info.type_name()
    }
}
