//! Paths into `pn_reflect` used by generated code.
//!
//! Only the crate root is resolved from the caller's manifest, every other
//! path is built from it so a module move in `pn_reflect` touches only
//! this file.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `pn_reflect` crate.
///
/// 1. For crates that depend on `pn_reflect`, `::pn_reflect` is returned.
/// 2. For crates that depend on `pn_core`, `::pn_core::reflect` is returned.
/// 3. Otherwise `::pn_reflect` is returned, which may be incorrect.
///
/// Reading the manifest is relatively expensive, so the result is passed
/// around rather than recomputed.
pub(crate) fn pn_reflect() -> syn::Path {
    pn_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pn_reflect"))
}

#[inline(always)]
pub(crate) fn info_(pn_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pn_reflect_path::info }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(pn_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pn_reflect_path::__macro_exports::auto_register }
}

#[inline(always)]
pub(crate) fn any_() -> TokenStream {
    quote! { ::core::any::Any }
}

#[inline(always)]
pub(crate) fn result_(pn_reflect_path: &syn::Path) -> TokenStream {
    quote! { ::core::result::Result<(), #pn_reflect_path::ReflectError> }
}
