use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate `TypePath` implementation.
pub(crate) fn impl_type_path(data: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(data.pn_reflect_path());
    let ident = data.ident();
    let type_name = data.type_name();

    let type_path = match &data.attrs().type_path {
        Some(lit) => quote! { #lit },
        None => {
            let ident_str = ident.to_string();
            quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) }
        }
    };

    quote! {
        impl #info_::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
