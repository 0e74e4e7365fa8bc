//! Provide `#[derive(Reflect)]` for `pn_reflect`.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Reflect`, `Object`
/// and `FromValue` for a struct with named fields or a unit struct.
/// Generic structs, tuple structs and enums are not supported.
///
/// Every field becomes an attribute, in declaration order, and must
/// implement `Reflect` and `FromValue`.
///
/// ## Type attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default, auto_register, type_path = "shop::Order")]
/// #[reflect(constructor = new(id, currency = "EUR"))]
/// struct Order { /* ... */ }
/// ```
///
/// - `default`: the type implements `Default`; instances can be created
///   without a constructor.
/// - `constructor = path(a, b = expr)`: the associated function used to
///   build instances, with its parameter names in order. A parameter may
///   declare a default, any expression convertible into `Value`.
///   A single-segment path is resolved on the type itself.
/// - `type_path = "..."`: a stable type path instead of
///   `module_path!()::Ident`.
/// - `auto_register`: register the type with `TypeRegistry::auto_register`.
///
/// ## Field attributes
///
/// - `ignore`: not an attribute at all.
/// - `read_only`: can be read but not written; the field type does not need
///   `FromValue`.
/// - `groups("a", "b")`: the serialization groups of the attribute.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(data) => impls::impl_struct(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
