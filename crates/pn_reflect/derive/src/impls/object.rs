use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::{FieldData, ReflectStruct};

/// Generate `Reflect` and `Object` implementations.
pub(crate) fn impl_object(data: &ReflectStruct) -> TokenStream {
    let pn_reflect_ = data.pn_reflect_path();
    let info_ = crate::path::info_(pn_reflect_);
    let ident = data.ident();

    quote! {
        impl #pn_reflect_::Reflect for #ident {
            #[inline]
            fn reflect_ref(&self) -> #pn_reflect_::ReflectRef<'_> {
                #pn_reflect_::ReflectRef::Object(self)
            }

            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                <Self as #info_::TypePath>::type_path()
            }
        }

        impl #pn_reflect_::Object for #ident {
            #[inline]
            fn object_info(&self) -> &'static #info_::ObjectInfo {
                <Self as #info_::Typed>::type_info()
            }
        }
    }
}

/// One `AttributeInfo` expression with its nested accessor functions.
///
/// The accessors name the struct explicitly: nested `fn` items cannot
/// refer to the outer `Self`.
fn attribute_info(data: &ReflectStruct, field: &FieldData) -> TokenStream {
    let pn_reflect_ = data.pn_reflect_path();
    let info_ = crate::path::info_(pn_reflect_);
    let any_ = crate::path::any_();
    let result_ = crate::path::result_(pn_reflect_);
    let ident = data.ident();
    let member = field.ident;
    let ty = field.ty;
    let name = field.name();

    let getter = quote! {
        fn get(owner: &dyn #any_) -> ::core::option::Option<&dyn #pn_reflect_::Reflect> {
            owner
                .downcast_ref::<#ident>()
                .map(|owner| &owner.#member as &dyn #pn_reflect_::Reflect)
        }
    };

    let groups = &field.attrs.groups;
    let with_groups = (!groups.is_empty()).then(|| quote! { .with_groups(&[#(#groups),*]) });

    if field.attrs.read_only {
        return quote! {{
            #getter
            #info_::AttributeInfo::read_only::<#ty>(#name, get) #with_groups
        }};
    }

    quote! {{
        #getter
        fn set(
            owner: &mut dyn #any_,
            value: #pn_reflect_::Value,
            de: &mut dyn #pn_reflect_::Denormalizer,
        ) -> #result_ {
            match owner.downcast_mut::<#ident>() {
                ::core::option::Option::Some(owner) => {
                    owner.#member = <#ty as #pn_reflect_::FromValue>::from_value(value, de)?;
                    ::core::result::Result::Ok(())
                }
                ::core::option::Option::None => ::core::result::Result::Err(
                    #pn_reflect_::ReflectError::AttributeNotWritable {
                        type_path: <#ident as #info_::TypePath>::type_path(),
                        attribute: ::core::convert::Into::into(#name),
                    },
                ),
            }
        }
        #info_::AttributeInfo::new::<#ty>(#name, get, set) #with_groups
    }}
}

/// `.with_constructor(...)`, if declared.
fn with_constructor(data: &ReflectStruct) -> Option<TokenStream> {
    let constructor = data.attrs().constructor.as_ref()?;
    let pn_reflect_ = data.pn_reflect_path();
    let info_ = crate::path::info_(pn_reflect_);
    let ident = data.ident();

    let func = &constructor.func;
    let call = match func.get_ident() {
        Some(name) => quote! { #ident::#name },
        None => quote! { #func },
    };

    let params = constructor.params.iter().map(|param| {
        let name = param.name.to_string();
        match &param.default {
            Some(expr) => {
                let default_fn = format_ident!("default_{}", param.name);
                quote! {{
                    fn #default_fn() -> #pn_reflect_::Value {
                        #pn_reflect_::Value::from(#expr)
                    }
                    #info_::ParamInfo::new(#name).with_default(#default_fn)
                }}
            }
            None => quote! { #info_::ParamInfo::new(#name) },
        }
    });

    let args = constructor.params.iter().map(|_| {
        quote! {
            #pn_reflect_::FromValue::from_value(
                args.next().unwrap_or(#pn_reflect_::Value::Null),
                de,
            )?
        }
    });

    Some(quote! {
        .with_constructor({
            fn construct(
                args: ::std::vec::Vec<#pn_reflect_::Value>,
                de: &mut dyn #pn_reflect_::Denormalizer,
            ) -> ::core::result::Result<
                ::std::boxed::Box<dyn #pn_reflect_::Object>,
                #pn_reflect_::ReflectError,
            > {
                let mut args = args.into_iter();
                let object: ::std::boxed::Box<dyn #pn_reflect_::Object> =
                    ::std::boxed::Box::new(#call(#(#args),*));
                ::core::result::Result::Ok(object)
            }
            #info_::ConstructorInfo::new(&[#(#params),*], construct)
        })
    })
}

/// `.with_default(...)`, if `#[reflect(default)]`.
fn with_default(data: &ReflectStruct) -> Option<TokenStream> {
    data.attrs().default?;
    let pn_reflect_ = data.pn_reflect_path();
    let ident = data.ident();

    Some(quote! {
        .with_default({
            fn default() -> ::std::boxed::Box<dyn #pn_reflect_::Object> {
                ::std::boxed::Box::new(<#ident as ::core::default::Default>::default())
            }
            default
        })
    })
}

/// Generate `Typed` implementation.
pub(crate) fn impl_typed(data: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(data.pn_reflect_path());
    let ident = data.ident();

    let attributes = data.fields().iter().map(|field| attribute_info(data, field));
    let with_constructor = with_constructor(data);
    let with_default = with_default(data);

    quote! {
        impl #info_::Typed for #ident {
            fn type_info() -> &'static #info_::ObjectInfo {
                static CELL: #info_::ObjectInfoCell = #info_::ObjectInfoCell::new();
                CELL.get_or_init(|| {
                    #info_::ObjectInfo::new::<Self>(::std::vec![#(#attributes),*])
                        #with_constructor
                        #with_default
                })
            }
        }
    }
}
