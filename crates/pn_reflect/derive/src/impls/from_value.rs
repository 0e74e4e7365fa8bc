use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate `FromValue` implementation, delegating to the denormalizer.
pub(crate) fn impl_from_value(data: &ReflectStruct) -> TokenStream {
    let pn_reflect_ = data.pn_reflect_path();
    let info_ = crate::path::info_(pn_reflect_);
    let ident = data.ident();

    quote! {
        impl #pn_reflect_::FromValue for #ident {
            fn from_value(
                value: #pn_reflect_::Value,
                de: &mut dyn #pn_reflect_::Denormalizer,
            ) -> ::core::result::Result<Self, #pn_reflect_::ReflectError> {
                de.denormalize_object(value, <Self as #info_::Typed>::type_info())?
                    .take::<Self>()
            }
        }
    }
}
