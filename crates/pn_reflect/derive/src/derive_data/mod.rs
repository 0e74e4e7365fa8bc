//! Parsed input of the derive.

// -----------------------------------------------------------------------------
// Modules

mod constructor;
mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use constructor::ConstructorAttr;
pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Path, Type};

/// One reflected field.
pub(crate) struct FieldData<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl FieldData<'_> {
    /// The declared name, without any raw identifier prefix.
    pub fn name(&self) -> String {
        self.ident.to_string().trim_start_matches("r#").to_owned()
    }
}

/// A struct accepted by `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    pn_reflect_path: Path,
    ident: &'a Ident,
    attrs: TypeAttributes,
    fields: Vec<FieldData<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| {
                    let attrs = match FieldAttributes::parse(&field.attrs) {
                        Ok(attrs) => attrs,
                        Err(err) => return Some(Err(err)),
                    };
                    let ident = field.ident.as_ref()?;
                    (!attrs.ignore).then_some(Ok(FieldData {
                        ident,
                        ty: &field.ty,
                        attrs,
                    }))
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new(
                    unnamed.span(),
                    "`Reflect` cannot be derived for tuple structs, use named fields",
                ));
            }
        };

        Ok(Self {
            pn_reflect_path: crate::path::pn_reflect(),
            ident: &ast.ident,
            attrs: TypeAttributes::parse(&ast.attrs)?,
            fields,
        })
    }

    #[inline]
    pub fn pn_reflect_path(&self) -> &Path {
        &self.pn_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[FieldData<'a>] {
        &self.fields
    }

    /// The name reported by `TypePath::type_name`.
    pub fn type_name(&self) -> String {
        match &self.attrs.type_path {
            Some(path) => {
                let path = path.value();
                match path.rsplit_once("::") {
                    Some((_, name)) => name.to_owned(),
                    None => path,
                }
            }
            None => self.ident.to_string(),
        }
    }
}
