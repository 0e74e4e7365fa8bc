use syn::spanned::Spanned;
use syn::{Expr, ExprCall, Ident, Path};

/// A constructor parameter, optionally with a default expression.
pub(crate) struct ConstructorParam {
    pub name: Ident,
    pub default: Option<Expr>,
}

/// `constructor = path(a, b = expr)`.
pub(crate) struct ConstructorAttr {
    pub func: Path,
    pub params: Vec<ConstructorParam>,
}

fn param_ident(expr: &Expr) -> syn::Result<Ident> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .cloned()
            .ok_or_else(|| syn::Error::new(path.span(), "expected a parameter name")),
        other => Err(syn::Error::new(other.span(), "expected a parameter name")),
    }
}

impl ConstructorAttr {
    pub fn from_call(call: ExprCall) -> syn::Result<Self> {
        let func = match *call.func {
            Expr::Path(path) if path.qself.is_none() => path.path,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "expected the path of an associated function, like `new`",
                ));
            }
        };

        let params = call
            .args
            .into_iter()
            .map(|arg| match arg {
                Expr::Assign(assign) => Ok(ConstructorParam {
                    name: param_ident(&assign.left)?,
                    default: Some(*assign.right),
                }),
                other => Ok(ConstructorParam {
                    name: param_ident(&other)?,
                    default: None,
                }),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        for (i, param) in params.iter().enumerate() {
            if params[..i].iter().any(|p| p.name == param.name) {
                return Err(syn::Error::new(
                    param.name.span(),
                    "duplicate constructor parameter",
                ));
            }
        }

        Ok(Self { func, params })
    }
}
