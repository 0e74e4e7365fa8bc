use crate::Object;
use crate::info::ObjectInfo;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// - [`type_path`](TypePath::type_path): unique identifier of the type.
/// - [`type_name`](TypePath::type_name): the last path segment, may be
///   shared by several types.
/// - [`module_path`](TypePath::module_path): everything before the name.
///
/// Paths never start with `::`.
///
/// ```
/// use pn_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default, type_path = "shop::order::Order")]
/// struct Order {
///     id: u64,
/// }
///
/// assert_eq!(Order::type_path(), "shop::order::Order");
/// assert_eq!(Order::type_name(), "Order");
/// assert_eq!(Order::module_path(), Some("shop::order"));
/// ```
pub trait TypePath: 'static {
    fn type_path() -> &'static str;

    fn type_name() -> &'static str;

    /// Derived from [`type_path`](TypePath::type_path) by default.
    fn module_path() -> Option<&'static str> {
        Self::type_path()
            .rsplit_once("::")
            .map(|(module, _)| module)
    }
}

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`ObjectInfo`] of a reflected struct.
///
/// Implemented by `#[derive(Reflect)]`; the descriptor is built on first use
/// and lives for the rest of the process.
pub trait Typed: Object + TypePath + Sized {
    fn type_info() -> &'static ObjectInfo;
}
