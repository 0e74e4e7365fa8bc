use pn_reflect::info::{AttributeInfo, ObjectInfo, ParamInfo};
use pn_reflect::{Denormalizer, Object, ReflectError, Value};
use pn_utils::hash::HashSet;
use pn_utils::index::IndexMap;
use tracing::trace;

use crate::name::NameConverter;

/// Builds one object from a map of incoming data.
///
/// 1. Each incoming key is matched to a declared name, first as-is, then
///    against the external form of each declared name, then through
///    [`NameConverter::denormalize`]. Keys matching neither an attribute
///    nor a constructor parameter are dropped.
/// 2. Keys outside the allowed attributes, or ignored, are dropped.
/// 3. Every constructor parameter takes its matching value, else its
///    default, else `null`.
/// 4. The remaining values are written into the new object. Values for
///    attributes that refuse writes are dropped.
///
/// A type without a constructor is built from its default instance.
pub struct ConstructorBinder<'a> {
    info: &'static ObjectInfo,
    names: &'a dyn NameConverter,
    allowed: Option<HashSet<&'static str>>,
    ignored: Option<&'a HashSet<String>>,
}

impl<'a> ConstructorBinder<'a> {
    #[inline]
    pub fn new(info: &'static ObjectInfo, names: &'a dyn NameConverter) -> Self {
        Self {
            info,
            names,
            allowed: None,
            ignored: None,
        }
    }

    /// Only bind these attributes, for example after group filtering.
    pub fn with_allowed<'b>(mut self, allowed: impl IntoIterator<Item = &'b AttributeInfo>) -> Self {
        self.allowed = Some(allowed.into_iter().map(AttributeInfo::name).collect());
        self
    }

    /// Never bind these attributes.
    #[inline]
    pub fn with_ignored(mut self, ignored: &'a HashSet<String>) -> Self {
        self.ignored = Some(ignored);
        self
    }

    fn declared(&self, name: &str) -> Option<&'static str> {
        if let Some(attribute) = self.info.attribute(name) {
            return Some(attribute.name());
        }
        self.info.constructor()?.param(name).map(ParamInfo::name)
    }

    /// Declared names whose external form is `key`.
    fn translated(&self, key: &str) -> Option<&'static str> {
        let attributes = self.info.attributes().iter().map(AttributeInfo::name);
        let params = self
            .info
            .constructor()
            .into_iter()
            .flat_map(|constructor| constructor.params().iter().map(ParamInfo::name));
        attributes
            .chain(params)
            .find(|declared| self.names.normalize(declared) == key)
    }

    fn resolve(&self, key: &str) -> Option<&'static str> {
        self.declared(key)
            .or_else(|| self.translated(key))
            .or_else(|| self.declared(&self.names.denormalize(key)))
    }

    fn is_eligible(&self, name: &str) -> bool {
        let ignored = self.ignored.is_some_and(|set| set.contains(name));
        let allowed = self.allowed.as_ref().is_none_or(|set| set.contains(name));
        allowed && !ignored
    }

    /// Build the object described by `data`, a [`Value::Map`].
    pub fn bind(&self, data: Value, de: &mut dyn Denormalizer) -> Result<Box<dyn Object>, ReflectError> {
        let type_path = self.info.type_path();
        let data = match data {
            Value::Map(map) => map,
            other => {
                return Err(ReflectError::InvalidValue {
                    expected: type_path,
                    found: other.kind(),
                });
            }
        };

        let mut resolved: IndexMap<&'static str, Value> = IndexMap::default();
        for (key, value) in data {
            let Some(name) = self.resolve(&key) else {
                trace!(type_path, key = %key, "dropping unknown attribute");
                continue;
            };
            if !self.is_eligible(name) {
                trace!(type_path, attribute = name, "skipping ignored or ungrouped attribute");
                continue;
            }
            resolved.insert(name, value);
        }

        let mut object = match self.info.constructor() {
            Some(constructor) => {
                let args = constructor
                    .params()
                    .iter()
                    .map(|param| {
                        if let Some(value) = resolved.shift_remove(param.name()) {
                            return value;
                        }
                        if let Some(value) = param.default_value() {
                            trace!(type_path, param = param.name(), "binding default value");
                            return value;
                        }
                        trace!(type_path, param = param.name(), "binding null");
                        Value::Null
                    })
                    .collect();
                constructor.construct(args, de)?
            }
            None => self.info.instantiate_default()?,
        };

        for (name, value) in resolved {
            match object.write(name, value, de) {
                Ok(()) => {}
                Err(ReflectError::AttributeNotWritable { .. }) => {
                    trace!(type_path, attribute = name, "dropping value of non-writable attribute");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(object)
    }
}

// -----------------------------------------------------------------------------
// Tests
