use proc_macro2::TokenStream;

use crate::derive_data::ReflectStruct;

/// Generate `auto_register` implementation.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(data: &ReflectStruct) -> TokenStream {
    let Some(span) = data.attrs().auto_register else {
        return TokenStream::new();
    };

    let auto_register_ = crate::path::auto_register_(data.pn_reflect_path());
    let ident = data.ident();

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectStruct) -> TokenStream {
    TokenStream::new()
}
