//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod from_value;
mod object;
mod type_path;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

pub(crate) fn impl_struct(data: &ReflectStruct) -> TokenStream {
    let type_path = type_path::impl_type_path(data);
    let object = object::impl_object(data);
    let typed = object::impl_typed(data);
    let from_value = from_value::impl_from_value(data);
    let auto_register = auto_register::get_auto_register_impl(data);

    quote! {
        #type_path
        #object
        #typed
        #from_value
        #auto_register
    }
}
