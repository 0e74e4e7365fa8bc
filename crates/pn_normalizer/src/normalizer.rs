use std::sync::Arc;

use pn_reflect::info::{ObjectInfo, Typed};
use pn_reflect::registry::TypeRegistry;
use pn_reflect::{Denormalizer, Mapping, Object, ObjectId, Reflect, ReflectError, ReflectRef, Value};
use pn_utils::hash::HashSet;
use tracing::{debug, warn};

use crate::binder::ConstructorBinder;
use crate::callback::{AttributeCallback, CallbackMap};
use crate::circular::{
    CircularReferenceHandler, CircularReferenceScope, DEFAULT_CIRCULAR_REFERENCE_LIMIT,
};
use crate::groups::{self, MetadataProvider, NoMetadata};
use crate::name::{IdentityConverter, NameConverter};
use crate::{Context, Error, Result, Serializer};

// -----------------------------------------------------------------------------
// PropertyNormalizer

/// Converts reflected structs to [`Value`] trees and back by accessing
/// their fields directly.
///
/// # Normalization
///
/// Each attribute of the object, in declaration order, is
///
/// 1. kept only if it passes the group filter of the call,
/// 2. skipped if it is an ignored attribute,
/// 3. replaced by its callback result if one is registered, else
///    normalized recursively, or through the injected [`Serializer`],
/// 4. stored under its name as given by the [`NameConverter`].
///
/// # Denormalization
///
/// The incoming map is bound to the type's constructor and then written
/// field by field, see [`ConstructorBinder`].
///
/// Settings are changed through `set_*` methods, which return `&mut Self`
/// for chaining.
pub struct PropertyNormalizer {
    ignored_attributes: HashSet<String>,
    callbacks: CallbackMap,
    circular_reference_limit: usize,
    circular_reference_scope: CircularReferenceScope,
    circular_reference_handler: Option<Arc<dyn CircularReferenceHandler>>,
    name_converter: Arc<dyn NameConverter>,
    metadata: Arc<dyn MetadataProvider>,
    serializer: Option<Arc<dyn Serializer>>,
}

impl Default for PropertyNormalizer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PropertyNormalizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyNormalizer")
            .field("ignored_attributes", &self.ignored_attributes)
            .field("callbacks", &self.callbacks)
            .field("circular_reference_limit", &self.circular_reference_limit)
            .field("circular_reference_scope", &self.circular_reference_scope)
            .field("has_circular_reference_handler", &self.circular_reference_handler.is_some())
            .field("has_serializer", &self.serializer.is_some())
            .finish_non_exhaustive()
    }
}

impl PropertyNormalizer {
    /// A normalizer without group metadata.
    #[inline]
    pub fn new() -> Self {
        Self::with_metadata(NoMetadata)
    }

    /// A normalizer reading group metadata from `metadata`.
    pub fn with_metadata(metadata: impl MetadataProvider + 'static) -> Self {
        Self {
            ignored_attributes: HashSet::default(),
            callbacks: CallbackMap::new(),
            circular_reference_limit: DEFAULT_CIRCULAR_REFERENCE_LIMIT,
            circular_reference_scope: CircularReferenceScope::default(),
            circular_reference_handler: None,
            name_converter: Arc::new(IdentityConverter),
            metadata: Arc::new(metadata),
            serializer: None,
        }
    }

    // -------------------------------------------------------------------------
    // Settings

    /// Replace the set of attributes never normalized nor denormalized.
    pub fn set_ignored_attributes<I, S>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace every callback.
    #[inline]
    pub fn set_callbacks(&mut self, callbacks: CallbackMap) -> &mut Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callback(
        &mut self,
        attribute: impl Into<String>,
        callback: impl AttributeCallback + 'static,
    ) -> &mut Self {
        self.callbacks.insert(attribute, callback);
        self
    }

    #[inline]
    pub fn set_circular_reference_limit(&mut self, limit: usize) -> &mut Self {
        self.circular_reference_limit = limit;
        self
    }

    #[inline]
    pub fn set_circular_reference_scope(&mut self, scope: CircularReferenceScope) -> &mut Self {
        self.circular_reference_scope = scope;
        self
    }

    /// Replace circular occurrences by the handler's value instead of failing.
    pub fn set_circular_reference_handler(
        &mut self,
        handler: impl CircularReferenceHandler + 'static,
    ) -> &mut Self {
        self.circular_reference_handler = Some(Arc::new(handler));
        self
    }

    pub fn set_name_converter(&mut self, converter: impl NameConverter + 'static) -> &mut Self {
        self.name_converter = Arc::new(converter);
        self
    }

    /// Delegate nested values to `serializer`.
    #[inline]
    pub fn set_serializer(&mut self, serializer: Arc<dyn Serializer>) -> &mut Self {
        self.serializer = Some(serializer);
        self
    }

    #[inline]
    pub fn ignored_attributes(&self) -> impl Iterator<Item = &str> {
        self.ignored_attributes.iter().map(String::as_str)
    }

    #[inline]
    pub fn callbacks(&self) -> &CallbackMap {
        &self.callbacks
    }

    #[inline]
    pub fn circular_reference_limit(&self) -> usize {
        self.circular_reference_limit
    }

    #[inline]
    pub fn circular_reference_scope(&self) -> CircularReferenceScope {
        self.circular_reference_scope
    }

    // -------------------------------------------------------------------------
    // Support checks

    /// Returns `true` if `value` is, or points to, a reflected struct.
    pub fn supports_normalization(&self, value: &dyn Reflect) -> bool {
        match value.reflect_ref() {
            ReflectRef::Object(_) => true,
            ReflectRef::Borrowed(inner) => self.supports_normalization(&*inner),
            ReflectRef::Owned(inner) => self.supports_normalization(&*inner),
            _ => false,
        }
    }

    #[inline]
    pub fn supports_denormalization(&self, data: &Value) -> bool {
        matches!(data, Value::Map(_))
    }

    // -------------------------------------------------------------------------
    // Normalization

    /// Normalize `value` with a fresh call state taken from `context`.
    pub fn normalize(&self, value: &dyn Reflect, format: Option<&str>, mut context: Context) -> Result<Value> {
        debug!(
            type_path = value.reflect_type_path(),
            format = ?format,
            groups = ?context.groups(),
            "normalizing"
        );
        context.tracker_mut().clear();
        self.normalize_value(value, format, &mut context)
    }

    /// Normalize `value` as part of a running call.
    pub fn normalize_value(&self, value: &dyn Reflect, format: Option<&str>, context: &mut Context) -> Result<Value> {
        match value.reflect_ref() {
            ReflectRef::Value(value) => Ok(value),
            ReflectRef::Object(object) => self.normalize_object(object, format, context),
            ReflectRef::List(items) => items
                .into_iter()
                .map(|item| self.normalize_nested(item, format, context))
                .collect::<Result<Vec<_>>>()
                .map(Value::Seq),
            ReflectRef::Map(entries) => {
                let mut map = Mapping::with_capacity(entries.len());
                for (key, item) in entries {
                    map.insert(key, self.normalize_nested(item, format, context)?);
                }
                Ok(Value::Map(map))
            }
            ReflectRef::Borrowed(inner) => self.normalize_value(&*inner, format, context),
            ReflectRef::Owned(inner) => self.normalize_value(&*inner, format, context),
        }
    }

    /// Normalize a child value, through the serializer if one is injected.
    fn normalize_nested(&self, value: &dyn Reflect, format: Option<&str>, context: &mut Context) -> Result<Value> {
        let Some(serializer) = &self.serializer else {
            return self.normalize_value(value, format, context);
        };
        match value.reflect_ref() {
            ReflectRef::Value(value) => Ok(value),
            _ => serializer.normalize(value, format, context),
        }
    }

    fn normalize_object(&self, object: &dyn Object, format: Option<&str>, context: &mut Context) -> Result<Value> {
        // Zero-sized values share an address and hold no references.
        if size_of_val(object) == 0 {
            return self.normalize_attributes(object, format, context);
        }

        let id = ObjectId::of(object);
        if context.tracker_mut().enter(id, self.circular_reference_limit) {
            return self.handle_circular_reference(object);
        }

        let result = self.normalize_attributes(object, format, context);

        if self.circular_reference_scope == CircularReferenceScope::Path {
            context.tracker_mut().leave(id);
        }
        result
    }

    fn normalize_attributes(&self, object: &dyn Object, format: Option<&str>, context: &mut Context) -> Result<Value> {
        let info = object.object_info();
        let spec = self.metadata.group_spec(info);
        let attributes = groups::filter(info.attributes(), spec.as_deref(), context.groups());

        let mut map = Mapping::with_capacity(attributes.len());
        for attribute in attributes {
            let name = attribute.name();
            if self.ignored_attributes.contains(name) {
                continue;
            }

            let raw = object.read(attribute)?;
            let value = match self.callbacks.apply(name, raw) {
                Some(result) => result?,
                None => self.normalize_nested(raw, format, context)?,
            };
            map.insert(self.name_converter.normalize(name), value);
        }
        Ok(Value::Map(map))
    }

    fn handle_circular_reference(&self, object: &dyn Object) -> Result<Value> {
        let type_path = object.reflect_type_path();
        match &self.circular_reference_handler {
            Some(handler) => {
                debug!(type_path, "replacing circular reference through handler");
                Ok(handler.handle(object))
            }
            None => {
                warn!(type_path, limit = self.circular_reference_limit, "circular reference detected");
                Err(Error::CircularReference {
                    type_path,
                    limit: self.circular_reference_limit,
                })
            }
        }
    }

    // -------------------------------------------------------------------------
    // Denormalization

    /// Build a `T` from `data`.
    pub fn denormalize<T: Typed>(&self, data: Value, format: Option<&str>, mut context: Context) -> Result<T> {
        let info = T::type_info();
        debug!(
            type_path = info.type_path(),
            format = ?format,
            groups = ?context.groups(),
            "denormalizing"
        );
        let object = self.denormalize_object(data, info, format, &mut context)?;
        Ok(object.take::<T>()?)
    }

    /// Build the registered type named `type_path` from `data`.
    ///
    /// `type_path` may also be a short type name, if it is unambiguous.
    pub fn denormalize_by_path(
        &self,
        registry: &TypeRegistry,
        data: Value,
        type_path: &str,
        format: Option<&str>,
        mut context: Context,
    ) -> Result<Box<dyn Object>> {
        let meta = registry
            .get_with_type_path(type_path)
            .or_else(|| registry.get_with_type_name(type_path))
            .ok_or_else(|| Error::UnknownType {
                type_path: type_path.to_owned(),
            })?;
        debug!(type_path = meta.type_path(), format = ?format, "denormalizing");
        self.denormalize_object(data, meta.info(), format, &mut context)
    }

    /// Build an object of type `info` as part of a running call.
    pub fn denormalize_object(
        &self,
        data: Value,
        info: &'static ObjectInfo,
        format: Option<&str>,
        context: &mut Context,
    ) -> Result<Box<dyn Object>> {
        let mut binder = ConstructorBinder::new(info, &*self.name_converter)
            .with_ignored(&self.ignored_attributes);
        if let (Some(spec), Some(requested)) = (self.metadata.group_spec(info), context.groups()) {
            binder = binder.with_allowed(groups::filter(info.attributes(), Some(&*spec), Some(requested)));
        }

        let mut session = Session {
            normalizer: self,
            format,
            context,
        };
        Ok(binder.bind(data, &mut session)?)
    }
}

impl Serializer for PropertyNormalizer {
    #[inline]
    fn normalize(&self, value: &dyn Reflect, format: Option<&str>, context: &mut Context) -> Result<Value> {
        self.normalize_value(value, format, context)
    }

    #[inline]
    fn denormalize(
        &self,
        data: Value,
        info: &'static ObjectInfo,
        format: Option<&str>,
        context: &mut Context,
    ) -> Result<Box<dyn Object>> {
        self.denormalize_object(data, info, format, context)
    }
}

// -----------------------------------------------------------------------------
// Session

/// The running denormalize call, handed to `FromValue` for nested objects.
struct Session<'a> {
    normalizer: &'a PropertyNormalizer,
    format: Option<&'a str>,
    context: &'a mut Context,
}

impl Denormalizer for Session<'_> {
    fn denormalize_object(
        &mut self,
        data: Value,
        info: &'static ObjectInfo,
    ) -> core::result::Result<Box<dyn Object>, ReflectError> {
        let result = match &self.normalizer.serializer {
            Some(serializer) => serializer.denormalize(data, info, self.format, self.context),
            None => self.normalizer.denormalize_object(data, info, self.format, self.context),
        };
        result.map_err(ReflectError::from)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use pn_reflect::derive::Reflect;
    use pn_reflect::info::TypePath;
    use pn_reflect::{ObjectId, Reflect, Value};

    use super::PropertyNormalizer;
    use crate::circular::CircularReferenceScope;
    use crate::groups::DeclaredGroups;
    use crate::{Context, Error};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Leaf {
        name: String,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Tree {
        label: String,
        leaves: Vec<Leaf>,
        #[reflect(groups("secret"))]
        code: u32,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Cyclic {
        name: String,
        me: RefCell<Weak<Cyclic>>,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Marker;

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Holder {
        a: Marker,
        b: Marker,
        many: Vec<Marker>,
    }

    fn tree() -> Tree {
        Tree {
            label: "root".into(),
            leaves: vec![Leaf { name: "a".into() }, Leaf { name: "b".into() }],
            code: 7,
        }
    }

    #[test]
    fn nested_round_trip() {
        let normalizer = PropertyNormalizer::new();
        let data = normalizer.normalize(&tree(), None, Context::new()).unwrap();

        let keys: Vec<&str> = data.as_map().unwrap().keys().collect();
        assert_eq!(keys, ["label", "leaves", "code"]);
        let leaves = data.get("leaves").and_then(Value::as_seq).unwrap();
        assert_eq!(leaves[1].get("name"), Some(&Value::from("b")));

        let back: Tree = normalizer.denormalize(data, None, Context::new()).unwrap();
        assert_eq!(back, tree());
    }

    #[test]
    fn groups_apply_both_ways() {
        let normalizer = PropertyNormalizer::with_metadata(DeclaredGroups::new());
        let data = normalizer
            .normalize(&tree(), None, Context::new().with_groups(["secret"]))
            .unwrap();
        assert_eq!(data.as_map().unwrap().len(), 1);
        assert_eq!(data.get("code"), Some(&Value::Int(7)));

        let data = normalizer.normalize(&tree(), None, Context::new()).unwrap();
        let back: Tree = normalizer
            .denormalize(data, None, Context::new().with_groups(["secret"]))
            .unwrap();
        assert_eq!(back.code, 7);
        assert!(back.label.is_empty());
    }

    #[test]
    fn cycles_fail_or_use_handler() {
        let node = Rc::new(Cyclic {
            name: "n".into(),
            me: RefCell::new(Weak::new()),
        });
        *node.me.borrow_mut() = Rc::downgrade(&node);

        let mut normalizer = PropertyNormalizer::new();
        let err = normalizer.normalize(&node, None, Context::new()).unwrap_err();
        assert!(matches!(err, Error::CircularReference { limit: 1, .. }));

        normalizer.set_circular_reference_handler(|object: &dyn pn_reflect::Object| {
            Value::from(object.reflect_type_path())
        });
        let data = normalizer.normalize(&node, None, Context::new()).unwrap();
        assert_eq!(
            data.get("me").and_then(Value::as_str),
            Some(Cyclic::type_path())
        );
    }

    #[test]
    fn shared_siblings_follow_scope() {
        let leaf = Rc::new(Leaf { name: "shared".into() });
        let siblings = vec![Rc::clone(&leaf), Rc::clone(&leaf)];

        let mut normalizer = PropertyNormalizer::new();
        assert!(normalizer.normalize(&siblings, None, Context::new()).is_ok());

        normalizer.set_circular_reference_scope(CircularReferenceScope::CallTree);
        assert!(matches!(
            normalizer.normalize(&siblings, None, Context::new()),
            Err(Error::CircularReference { .. })
        ));
    }

    #[test]
    fn zero_sized_objects_are_not_tracked() {
        let holder = Holder {
            many: vec![Marker, Marker],
            ..Default::default()
        };
        let mut normalizer = PropertyNormalizer::new();
        normalizer.set_circular_reference_scope(CircularReferenceScope::CallTree);

        let data = normalizer.normalize(&holder, None, Context::new()).unwrap();
        assert_eq!(data.get("a"), Some(&Value::Map(Default::default())));
        assert_eq!(data.get("many").and_then(Value::as_seq).map(<[_]>::len), Some(2));
    }

    #[test]
    fn top_level_calls_start_with_no_visits() {
        let leaf = Leaf { name: "leaf".into() };
        let mut context = Context::new();
        assert!(!context.tracker_mut().enter(ObjectId::of(&leaf), 1));

        let normalizer = PropertyNormalizer::new();
        assert!(normalizer.normalize(&leaf, None, context.clone()).is_ok());
        assert_eq!(context.tracker().len(), 1);
    }

    #[test]
    fn supports() {
        let normalizer = PropertyNormalizer::new();
        assert!(normalizer.supports_normalization(&tree()));
        assert!(normalizer.supports_normalization(&Rc::new(tree())));
        assert!(!normalizer.supports_normalization(&3_u8));
        assert!(!normalizer.supports_normalization(&vec![tree()] as &dyn Reflect));
        assert!(normalizer.supports_denormalization(&[("a", 1)].into_iter().collect()));
        assert!(!normalizer.supports_denormalization(&Value::Null));
    }
}
