use syn::punctuated::Punctuated;
use syn::{Attribute, LitStr, Token, parenthesized};

use crate::REFLECT_ATTRIBUTE_NAME;

/// `#[reflect(...)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub ignore: bool,
    pub read_only: bool,
    pub groups: Vec<LitStr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else if meta.path.is_ident("read_only") {
                    this.read_only = true;
                } else if meta.path.is_ident("groups") {
                    let content;
                    parenthesized!(content in meta.input);
                    let groups = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    this.groups.extend(groups);
                } else {
                    return Err(meta.error("unsupported `reflect` field attribute"));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}
