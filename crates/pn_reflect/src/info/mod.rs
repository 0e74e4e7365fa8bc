//! Static descriptors of reflected types.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable names of a type.
//! - [`Typed`]: static access to a type's [`ObjectInfo`].
//! - [`ObjectInfo`]: attributes, constructor and default of a struct.
//! - [`AttributeInfo`]: one named data member and its accessors.
//! - [`ConstructorInfo`]: the ordered parameters of a constructor.
//! - [`ObjectInfoCell`]: lazily initialised static storage for `ObjectInfo`.

// -----------------------------------------------------------------------------
// Modules

mod attribute_info;
mod constructor_info;
mod object_info;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use attribute_info::{AttributeGetter, AttributeInfo, AttributeSetter};
pub use constructor_info::{ConstructorFn, ConstructorInfo, ParamInfo};
pub use object_info::{ObjectInfo, ObjectInfoCell};
pub use type_path::{TypePath, Typed};
