use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another `pn_*` crate as seen from
/// the Cargo.toml of the crate invoking a derive.
///
/// # Example
///
/// ```rust
/// # use pn_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pn_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. The crate is a dependency under its own name: `::pn_reflect`.
/// 2. The crate is a dependency renamed through `package = "pn_reflect"`:
///    `::alias`.
/// 3. The name begins with `pn_` and the facade crate `pn_core` is a
///    dependency: `::pn_core::reflect`.
/// 4. Repeat 1-3 in `dev-dependencies`.
/// 5. Fall back to `::pn_reflect`.
///
/// Inside the target crate itself, rule 5 applies, which is why
/// `pn_reflect` declares `extern crate self as pn_reflect;`.
#[derive(Debug)]
pub struct Manifest {
    manifest: Document<Box<str>>,
    modified_time: SystemTime,
}

const FACADE_NAME: &str = "pn_core";
const CRATE_PREFIX: &str = "pn_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn path_of(segments: &[&str]) -> syn::Path {
        syn::parse_str(&format!("::{}", segments.join("::")))
            .expect("crate names are valid path segments")
    }

    /// A dependency renamed with `alias = { package = "name", .. }`.
    fn find_renamed(deps: &Table, name: &str) -> Option<String> {
        deps.iter().find_map(|(alias, item)| {
            let package = match item {
                Item::Table(table) => table.get("package")?.as_str()?,
                Item::Value(value) => value.as_inline_table()?.get("package")?.as_str()?,
                _ => return None,
            };
            (package == name).then(|| alias.replace('-', "_"))
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::path_of(&[name]));
        }
        if let Some(alias) = Self::find_renamed(deps, name) {
            return Some(Self::path_of(&[&alias]));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::path_of(&[FACADE_NAME, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// the caller's Cargo.toml. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| Self::find_in_deps(deps, name))
            .unwrap_or_else(|| Self::path_of(&[name]))
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and re-read only when the file's
    /// modified time changes. Call this once per macro invocation and pass
    /// the resulting path around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::manifest_path();
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use toml_edit::Document;

    use super::Manifest;

    fn resolve(manifest: &str, name: &str) -> String {
        let manifest = Manifest {
            manifest: Document::parse(manifest.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        };
        let path = manifest.get_crate_path(name);
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let toml = "[dependencies]\npn_reflect = { path = \"../pn_reflect\" }\n";
        assert_eq!(resolve(toml, "pn_reflect"), "::pn_reflect");
    }

    #[test]
    fn renamed_dependency() {
        let toml = "[dependencies]\nreflect = { package = \"pn_reflect\", version = \"0.0.1\" }\n";
        assert_eq!(resolve(toml, "pn_reflect"), "::reflect");
    }

    #[test]
    fn facade_dependency() {
        let toml = "[dev-dependencies]\npn_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "pn_reflect"), "::pn_core::reflect");
    }

    #[test]
    fn direct_wins_over_facade() {
        let toml = "[dependencies]\npn_core = \"0.0.1\"\npn_reflect = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "pn_reflect"), "::pn_reflect");
    }

    #[test]
    fn fallback() {
        let toml = "[package]\nname = \"pn_reflect\"\n";
        assert_eq!(resolve(toml, "pn_reflect"), "::pn_reflect");
    }
}
