mod fixtures;

use chrono::{TimeZone, Utc};
use pn_normalizer::callback::CallbackMap;
use pn_normalizer::circular::CircularReferenceScope;
use pn_normalizer::groups::{DeclaredGroups, GroupSpec, MetadataMap};
use pn_normalizer::name::{CamelCaseToSnakeCase, SnakeCaseToCamelCase};
use pn_normalizer::{Context, Error, PropertyNormalizer, Value};
use pn_reflect::info::TypePath;
use pn_reflect::registry::TypeRegistry;
use pn_reflect::{Object, Reflect, ReflectError};

use fixtures::*;

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect()
}

fn keys(value: &Value) -> Vec<&str> {
    value.as_map().map(|m| m.keys().collect()).unwrap_or_default()
}

// -----------------------------------------------------------------------------
// Normalize and denormalize

#[test]
fn normalize() {
    fixtures::init_logs();
    let mut obj = PropertyDummy {
        foo: Some("foo".into()),
        ..Default::default()
    };
    obj.set_bar("bar");
    obj.set_camel_case("camelcase");

    let data = PropertyNormalizer::new()
        .normalize(&obj, Some("any"), Context::new())
        .unwrap();
    assert_eq!(
        data,
        map([
            ("foo", "foo".into()),
            ("bar", "bar".into()),
            ("camel_case", "camelcase".into()),
        ])
    );
    assert_eq!(keys(&data), ["foo", "bar", "camel_case"]);
}

#[test]
fn denormalize() {
    let obj: PropertyDummy = PropertyNormalizer::new()
        .denormalize(
            map([("foo", "foo".into()), ("bar", "bar".into())]),
            Some("any"),
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj.foo.as_deref(), Some("foo"));
    assert_eq!(obj.bar(), Some("bar"));
    assert_eq!(obj.camel_case(), None);
}

#[test]
fn round_trip_keeps_carried_attributes() {
    let mut obj = PropertyDummy {
        foo: Some("f".into()),
        ..Default::default()
    };
    obj.set_bar("b");

    let normalizer = PropertyNormalizer::new();
    let data = normalizer.normalize(&obj, None, Context::new()).unwrap();
    let back: PropertyDummy = normalizer.denormalize(data, None, Context::new()).unwrap();
    assert_eq!(back, obj);
}

#[test]
fn denormalize_non_existing_attribute() {
    let obj: PropertyDummy = PropertyNormalizer::new()
        .denormalize(map([("non_existing", true.into())]), None, Context::new())
        .unwrap();
    assert_eq!(obj, PropertyDummy::default());
}

#[test]
fn denormalize_invalid_values() {
    let normalizer = PropertyNormalizer::new();
    let err = normalizer
        .denormalize::<PropertyDummy>(map([("foo", 3.into())]), None, Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::Reflect(ReflectError::InvalidValue { found: "int", .. })));

    let err = normalizer
        .denormalize::<PropertyDummy>(Value::from("scalar"), None, Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::Reflect(ReflectError::InvalidValue { .. })));
}

#[test]
fn denormalize_through_registry() {
    let mut registry = TypeRegistry::new();
    registry.register::<PropertyConstructorDummy>();
    let normalizer = PropertyNormalizer::new();
    let data = map([("foo", "foo".into()), ("bar", "bar".into())]);

    let object = normalizer
        .denormalize_by_path(
            &registry,
            data.clone(),
            PropertyConstructorDummy::type_path(),
            None,
            Context::new(),
        )
        .unwrap();
    assert!(object.is::<PropertyConstructorDummy>());

    let object = normalizer
        .denormalize_by_path(&registry, data.clone(), "PropertyConstructorDummy", None, Context::new())
        .unwrap();
    let obj = object.take::<PropertyConstructorDummy>().unwrap();
    assert_eq!((obj.foo(), obj.bar()), ("foo", "bar"));

    let err = normalizer
        .denormalize_by_path(&registry, data, "missing::Type", None, Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::UnknownType { ref type_path } if type_path == "missing::Type"));
}

#[cfg(feature = "auto_register")]
#[test]
fn denormalize_auto_registered() {
    let mut registry = TypeRegistry::new();
    assert!(registry.auto_register());
    assert!(registry.get_with_type_path(PropertyDummy::type_path()).is_some());

    let object = PropertyNormalizer::new()
        .denormalize_by_path(
            &registry,
            map([("foo", "foo".into())]),
            PropertyDummy::type_path(),
            None,
            Context::new(),
        )
        .unwrap();
    assert_eq!(object.take::<PropertyDummy>().unwrap().foo.as_deref(), Some("foo"));
}

// -----------------------------------------------------------------------------
// Names

#[test]
fn external_camel_case_names() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_name_converter(SnakeCaseToCamelCase::new());

    let mut obj = PropertyDummy::default();
    obj.set_camel_case("camelcase");
    let data = normalizer.normalize(&obj, None, Context::new()).unwrap();
    assert_eq!(keys(&data), ["foo", "bar", "camelCase"]);

    let obj: PropertyDummy = normalizer
        .denormalize(map([("camelCase", "value".into())]), None, Context::new())
        .unwrap();
    assert_eq!(obj.camel_case(), Some("value"));

    // declared names still match as-is
    let obj: PropertyDummy = normalizer
        .denormalize(map([("camel_case", "value".into())]), None, Context::new())
        .unwrap();
    assert_eq!(obj.camel_case(), Some("value"));
}

#[test]
fn converted_names_with_digits_round_trip() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_name_converter(SnakeCaseToCamelCase::new());

    let mut obj = AddressDummy::new("x".into());
    obj.line2_extra = Some("y".into());
    let data = normalizer.normalize(&obj, None, Context::new()).unwrap();
    assert_eq!(data, map([("addressLine1", "x".into()), ("line2Extra", "y".into())]));

    let back: AddressDummy = normalizer.denormalize(data, None, Context::new()).unwrap();
    assert_eq!(back, obj);
}

#[test]
fn converted_acronyms_round_trip() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_name_converter(CamelCaseToSnakeCase::new());

    let obj = AcronymDummy {
        fooBAR: Some("baz".into()),
    };
    let data = normalizer.normalize(&obj, None, Context::new()).unwrap();
    assert_eq!(data, map([("foo_bar", "baz".into())]));

    let back: AcronymDummy = normalizer.denormalize(data, None, Context::new()).unwrap();
    assert_eq!(back, obj);
}

fn camelized() -> PropertyCamelizedDummy {
    let mut obj = PropertyCamelizedDummy::new(Some("dunglas.fr".into()));
    obj.fooBar = Some("les-tilleuls.coop".into());
    obj.bar_foo = Some("lostinthesupermarket.fr".into());
    obj
}

#[test]
fn camelized_attributes_normalize() {
    let obj = camelized();
    let mut normalizer = PropertyNormalizer::new();

    normalizer.set_name_converter(CamelCaseToSnakeCase::with_attributes(["kevin_dunglas"]));
    assert_eq!(
        normalizer.normalize(&obj, None, Context::new()).unwrap(),
        map([
            ("kevin_dunglas", "dunglas.fr".into()),
            ("fooBar", "les-tilleuls.coop".into()),
            ("bar_foo", "lostinthesupermarket.fr".into()),
        ])
    );

    normalizer.set_name_converter(CamelCaseToSnakeCase::with_attributes(["foo_bar"]));
    assert_eq!(
        normalizer.normalize(&obj, None, Context::new()).unwrap(),
        map([
            ("kevinDunglas", "dunglas.fr".into()),
            ("foo_bar", "les-tilleuls.coop".into()),
            ("bar_foo", "lostinthesupermarket.fr".into()),
        ])
    );
}

#[test]
fn camelized_attributes_denormalize() {
    let mut normalizer = PropertyNormalizer::new();

    normalizer.set_name_converter(CamelCaseToSnakeCase::with_attributes(["kevin_dunglas"]));
    let obj: PropertyCamelizedDummy = normalizer
        .denormalize(
            map([
                ("kevin_dunglas", "dunglas.fr".into()),
                ("fooBar", "les-tilleuls.coop".into()),
                ("bar_foo", "lostinthesupermarket.fr".into()),
            ]),
            None,
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj, camelized());

    normalizer.set_name_converter(CamelCaseToSnakeCase::with_attributes(["foo_bar"]));
    let obj: PropertyCamelizedDummy = normalizer
        .denormalize(
            map([
                ("kevinDunglas", "dunglas.fr".into()),
                ("foo_bar", "les-tilleuls.coop".into()),
                ("bar_foo", "lostinthesupermarket.fr".into()),
            ]),
            None,
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj, camelized());
}

// -----------------------------------------------------------------------------
// Constructors

#[test]
fn constructor_denormalize() {
    let obj: PropertyConstructorDummy = PropertyNormalizer::new()
        .denormalize(
            map([("foo", "foo".into()), ("bar", "bar".into())]),
            Some("any"),
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj.foo(), "foo");
    assert_eq!(obj.bar(), "bar");
}

#[test]
fn constructor_defaults() {
    let normalizer = PropertyNormalizer::new();

    let obj: MultiParamDummy = normalizer
        .denormalize(
            map([
                ("baz", 7.into()),
                ("foo", "foo".into()),
                ("created_by", "input".into()),
            ]),
            None,
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj.parts(), ("foo", "bar default", 7, "constructor"));

    let obj: MultiParamDummy = normalizer
        .denormalize(map([("foo", "foo".into())]), None, Context::new())
        .unwrap();
    assert_eq!(obj.parts(), ("foo", "bar default", 42, "constructor"));

    // a parameter without default and without data is bound to null
    let err = normalizer
        .denormalize::<MultiParamDummy>(map([]), None, Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::Reflect(ReflectError::InvalidValue { found: "null", .. })));
}

#[test]
fn ignored_attributes_are_not_bound() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_ignored_attributes(["bar"]);

    let obj: MultiParamDummy = normalizer
        .denormalize(
            map([("foo", "foo".into()), ("bar", "input".into())]),
            None,
            Context::new(),
        )
        .unwrap();
    assert_eq!(obj.parts().1, "bar default");

    let obj: PropertyDummy = normalizer
        .denormalize(map([("bar", "input".into())]), None, Context::new())
        .unwrap();
    assert_eq!(obj.bar(), None);
}

#[test]
fn types_without_default_are_not_instantiable() {
    let err = PropertyNormalizer::new()
        .denormalize::<ListDummy>(map([("foo", "foo".into())]), None, Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::Reflect(ReflectError::NotInstantiable { .. })));
}

// -----------------------------------------------------------------------------
// Callbacks

fn normalize_with(callbacks: CallbackMap, obj: &dyn Reflect) -> Value {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_callbacks(callbacks);
    normalizer.normalize(obj, Some("any"), Context::new()).unwrap()
}

#[test]
fn callback_changes_a_string() {
    let callbacks = CallbackMap::new().with("bar", |_: &dyn Reflect| Value::from("baz"));
    let data = normalize_with(callbacks, &PropertyConstructorDummy::new("".into(), "baz".into()));
    assert_eq!(data, map([("foo", "".into()), ("bar", "baz".into())]));
}

#[test]
fn callback_nulls_an_item() {
    let callbacks = CallbackMap::new().with("bar", |_: &dyn Reflect| Value::Null);
    let data = normalize_with(callbacks, &PropertyConstructorDummy::new("".into(), "baz".into()));
    assert_eq!(data, map([("foo", "".into()), ("bar", Value::Null)]));
}

#[test]
fn callback_fills_a_null_item() {
    let callbacks = CallbackMap::new().with("bar", |raw: &dyn Reflect| {
        assert_eq!(raw.to_value(), Some(Value::Null));
        Value::from("filled")
    });
    let mut obj = PropertyDummy::default();
    obj.foo = Some("foo".into());
    let data = normalize_with(callbacks, &obj);
    assert_eq!(
        data,
        map([("foo", "foo".into()), ("bar", "filled".into()), ("camel_case", Value::Null)])
    );
}

#[test]
fn callback_formats_a_date() {
    let callbacks = CallbackMap::new().with("bar", |bar: &dyn Reflect| {
        Value::from(
            bar.downcast_ref::<Stamp>()
                .map(|stamp| stamp.0.format("%d-%m-%Y %H:%M:%S").to_string()),
        )
    });
    let obj = DatedDummy {
        foo: String::new(),
        bar: Stamp(Utc.with_ymd_and_hms(2011, 9, 10, 6, 30, 0).unwrap()),
    };
    let data = normalize_with(callbacks, &obj);
    assert_eq!(data, map([("foo", "".into()), ("bar", "10-09-2011 06:30:00".into())]));

    // without the callback the date keeps its own representation
    let data = normalize_with(CallbackMap::new(), &obj);
    assert_eq!(data.get("bar"), Some(&Value::from("2011-09-10T06:30:00+00:00")));
}

fn list() -> ListDummy {
    ListDummy {
        foo: String::new(),
        bar: vec![
            PropertyConstructorDummy::new("baz".into(), "".into()),
            PropertyConstructorDummy::new("quux".into(), "".into()),
        ],
    }
}

#[test]
fn callback_collects_a_property() {
    let callbacks = CallbackMap::new().with("bar", |bars: &dyn Reflect| {
        let bars = bars.downcast_ref::<Vec<PropertyConstructorDummy>>();
        Value::from(bars.map_or_else(String::new, |bars| bars.iter().map(|b| b.foo()).collect()))
    });
    let data = normalize_with(callbacks, &list());
    assert_eq!(data, map([("foo", "".into()), ("bar", "bazquux".into())]));
}

#[test]
fn callback_counts_a_property() {
    let callbacks = CallbackMap::new().with("bar", |bars: &dyn Reflect| {
        Value::from(bars.downcast_ref::<Vec<PropertyConstructorDummy>>().map(Vec::len))
    });
    let data = normalize_with(callbacks, &list());
    assert_eq!(data, map([("foo", "".into()), ("bar", 2.into())]));
}

#[test]
fn uncallable_callbacks() {
    let mut callbacks = CallbackMap::new();
    callbacks.insert_uncallable("bar");

    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_callbacks(callbacks);

    // registration succeeds; the failure happens when `bar` is reached
    let err = normalizer
        .normalize(&PropertyConstructorDummy::new("baz".into(), "quux".into()), Some("any"), Context::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCallback { ref attribute } if attribute == "bar"));

    // never reached: no failure
    assert!(normalizer.normalize(&GroupDummyParent::default(), None, Context::new()).is_ok());
}

// -----------------------------------------------------------------------------
// Ignored attributes

#[test]
fn ignored_attributes() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_ignored_attributes(["foo", "bar", "camel_case"]);

    let mut obj = PropertyDummy {
        foo: Some("foo".into()),
        ..Default::default()
    };
    obj.set_bar("bar");
    assert_eq!(normalizer.normalize(&obj, Some("any"), Context::new()).unwrap(), map([]));

    normalizer.set_ignored_attributes(["bar"]);
    for value in ["x", "y", ""] {
        obj.set_bar(value);
        let data = normalizer.normalize(&obj, None, Context::new()).unwrap();
        assert_eq!(keys(&data), ["foo", "camel_case"]);
    }
}

// -----------------------------------------------------------------------------
// Groups

fn grouped() -> GroupDummy {
    GroupDummy {
        parent: GroupDummyParent {
            kevin: Some("kevin".into()),
            coop_tilleuls: Some("coopTilleuls".into()),
        },
        foo: Some("foo".into()),
        bar: Some("bar".into()),
        foo_bar: Some("fooBar".into()),
        symfony: Some("symfony".into()),
    }
}

#[test]
fn groups_normalize() {
    let normalizer = PropertyNormalizer::with_metadata(DeclaredGroups::new());
    let obj = grouped();

    let c = normalizer
        .normalize(&obj, None, Context::new().with_groups(["c"]))
        .unwrap();
    assert_eq!(c, map([("bar", "bar".into())]));

    // members of the embedded struct are not flattened, and the struct
    // itself belongs to no group
    let ac = normalizer
        .normalize(&obj, None, Context::new().with_groups(["a", "c"]))
        .unwrap();
    assert_eq!(
        ac,
        map([
            ("symfony", "symfony".into()),
            ("foo", "foo".into()),
            ("foo_bar", "fooBar".into()),
            ("bar", "bar".into()),
        ])
    );

    // monotonic: adding a group only adds attributes
    let ac = ac.as_map().unwrap();
    for (key, value) in c.as_map().unwrap().iter() {
        assert_eq!(ac.get(key), Some(value));
    }

    let none = normalizer
        .normalize(&obj, None, Context::new().with_groups(Vec::<String>::new()))
        .unwrap();
    assert_eq!(none, map([]));

    let all = normalizer.normalize(&obj, None, Context::new()).unwrap();
    assert_eq!(keys(&all), ["parent", "foo", "bar", "foo_bar", "symfony"]);
}

#[test]
fn groups_denormalize() {
    let normalizer = PropertyNormalizer::with_metadata(DeclaredGroups::new());
    let data = map([("foo", "foo".into()), ("bar", "bar".into())]);

    let mut expected = GroupDummy {
        foo: Some("foo".into()),
        ..Default::default()
    };
    let obj: GroupDummy = normalizer
        .denormalize(data.clone(), None, Context::new().with_groups(["a"]))
        .unwrap();
    assert_eq!(obj, expected);

    expected.bar = Some("bar".into());
    let obj: GroupDummy = normalizer
        .denormalize(data, None, Context::new().with_groups(["a", "b"]))
        .unwrap();
    assert_eq!(obj, expected);
}

#[test]
fn groups_from_runtime_metadata() {
    let metadata = MetadataMap::new().with::<PropertyDummy>(GroupSpec::new().with("foo", ["public"]));
    let normalizer = PropertyNormalizer::with_metadata(metadata);
    let obj = PropertyDummy {
        foo: Some("foo".into()),
        ..Default::default()
    };

    let data = normalizer
        .normalize(&obj, None, Context::new().with_groups(["public"]))
        .unwrap();
    assert_eq!(data, map([("foo", "foo".into())]));
}

// -----------------------------------------------------------------------------
// Circular references

#[test]
fn unable_to_normalize_circular_reference() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_circular_reference_limit(2);

    let obj = PropertyCircularReferenceDummy::new();
    let err = normalizer.normalize(&obj, None, Context::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::CircularReference { type_path, limit: 2 }
            if type_path == PropertyCircularReferenceDummy::type_path()
    ));
}

#[test]
fn sibling_reference() {
    let holder = PropertySiblingHolder::new();
    let sibling = map([("coop_tilleuls", "Les-Tilleuls.coop".into())]);
    let expected = map([
        ("sibling0", sibling.clone()),
        ("sibling1", sibling.clone()),
        ("sibling2", sibling),
    ]);

    let mut normalizer = PropertyNormalizer::new();
    assert_eq!(normalizer.normalize(&holder, None, Context::new()).unwrap(), expected);

    // counting every visit of the call turns reuse into a circular reference
    normalizer.set_circular_reference_scope(CircularReferenceScope::CallTree);
    assert!(matches!(
        normalizer.normalize(&holder, None, Context::new()),
        Err(Error::CircularReference { .. })
    ));

    normalizer.set_circular_reference_limit(3);
    assert_eq!(normalizer.normalize(&holder, None, Context::new()).unwrap(), expected);
}

#[test]
fn circular_reference_handler() {
    let mut normalizer = PropertyNormalizer::new();
    normalizer.set_circular_reference_handler(|obj: &dyn Object| Value::from(obj.reflect_type_path()));

    let obj = PropertyCircularReferenceDummy::new();
    let expected = map([("me", PropertyCircularReferenceDummy::type_path().into())]);
    assert_eq!(normalizer.normalize(&obj, None, Context::new()).unwrap(), expected);
}

#[test]
fn contexts_do_not_leak_between_calls() {
    let normalizer = PropertyNormalizer::new();
    let holder = PropertySiblingHolder::new();
    let context = Context::new();
    assert_eq!(context.tracker().len(), 0);

    for _ in 0..3 {
        assert!(normalizer.normalize(&holder, None, context.clone()).is_ok());
    }
}
