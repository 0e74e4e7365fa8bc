use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, ExprCall, LitStr};

use super::ConstructorAttr;
use crate::REFLECT_ATTRIBUTE_NAME;

/// `#[reflect(...)]` on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub default: Option<Span>,
    pub auto_register: Option<Span>,
    pub type_path: Option<LitStr>,
    pub constructor: Option<ConstructorAttr>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    this.default = Some(meta.path.span());
                } else if meta.path.is_ident("auto_register") {
                    this.auto_register = Some(meta.path.span());
                } else if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let path = lit.value();
                    if path.is_empty() || path.starts_with("::") {
                        return Err(meta.error("`type_path` must be non-empty and not start with `::`"));
                    }
                    this.type_path = Some(lit);
                } else if meta.path.is_ident("constructor") {
                    let call: ExprCall = meta.value()?.parse()?;
                    this.constructor = Some(ConstructorAttr::from_call(call)?);
                } else {
                    return Err(meta.error("unsupported `reflect` type attribute"));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
