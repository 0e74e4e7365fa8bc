//! Structs shared by the integration tests.
#![allow(dead_code, non_snake_case)]

use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use pn_reflect::derive::Reflect;
use pn_reflect::{Denormalizer, FromValue, Reflect, ReflectError, ReflectRef, Value};

pub fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// -----------------------------------------------------------------------------
// Plain structs

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(default, auto_register)]
pub struct PropertyDummy {
    pub foo: Option<String>,
    pub bar: Option<String>,
    pub camel_case: Option<String>,
}

impl PropertyDummy {
    pub fn bar(&self) -> Option<&str> {
        self.bar.as_deref()
    }

    pub fn set_bar(&mut self, bar: impl Into<String>) {
        self.bar = Some(bar.into());
    }

    pub fn camel_case(&self) -> Option<&str> {
        self.camel_case.as_deref()
    }

    pub fn set_camel_case(&mut self, camel_case: impl Into<String>) {
        self.camel_case = Some(camel_case.into());
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(constructor = new(foo, bar))]
pub struct PropertyConstructorDummy {
    foo: String,
    bar: String,
}

impl PropertyConstructorDummy {
    pub fn new(foo: String, bar: String) -> Self {
        Self { foo, bar }
    }

    pub fn foo(&self) -> &str {
        &self.foo
    }

    pub fn bar(&self) -> &str {
        &self.bar
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(constructor = new(kevinDunglas))]
pub struct PropertyCamelizedDummy {
    kevinDunglas: Option<String>,
    pub fooBar: Option<String>,
    pub bar_foo: Option<String>,
}

impl PropertyCamelizedDummy {
    pub fn new(kevinDunglas: Option<String>) -> Self {
        Self {
            kevinDunglas,
            fooBar: None,
            bar_foo: None,
        }
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(constructor = new(foo, bar = "bar default", baz = 42))]
pub struct MultiParamDummy {
    foo: String,
    bar: String,
    baz: i64,
    #[reflect(read_only)]
    created_by: String,
}

impl MultiParamDummy {
    pub fn new(foo: String, bar: String, baz: i64) -> Self {
        Self {
            foo,
            bar,
            baz,
            created_by: "constructor".into(),
        }
    }

    pub fn parts(&self) -> (&str, &str, i64, &str) {
        (&self.foo, &self.bar, self.baz, &self.created_by)
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(constructor = new(address_line_1))]
pub struct AddressDummy {
    pub address_line_1: String,
    pub line2_extra: Option<String>,
}

impl AddressDummy {
    pub fn new(address_line_1: String) -> Self {
        Self {
            address_line_1,
            line2_extra: None,
        }
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
pub struct AcronymDummy {
    pub fooBAR: Option<String>,
}

// -----------------------------------------------------------------------------
// Callback targets

/// A timestamp exchanged as an RFC 3339 string.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp(pub DateTime<Utc>);

impl Reflect for Stamp {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Value(Value::from(self.0.to_rfc3339()))
    }
}

impl FromValue for Stamp {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        let text = value.as_str().ok_or(ReflectError::InvalidValue {
            expected: "Stamp",
            found: value.kind(),
        })?;
        DateTime::parse_from_rfc3339(text)
            .map(|date| Stamp(date.with_timezone(&Utc)))
            .map_err(ReflectError::custom)
    }
}

#[derive(Reflect)]
pub struct DatedDummy {
    pub foo: String,
    pub bar: Stamp,
}

#[derive(Reflect, Debug)]
pub struct ListDummy {
    pub foo: String,
    pub bar: Vec<PropertyConstructorDummy>,
}

// -----------------------------------------------------------------------------
// Groups

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
pub struct GroupDummyParent {
    #[reflect(groups("a"))]
    pub kevin: Option<String>,
    #[reflect(groups("a", "b"))]
    pub coop_tilleuls: Option<String>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
pub struct GroupDummy {
    pub parent: GroupDummyParent,
    #[reflect(groups("a"))]
    pub foo: Option<String>,
    #[reflect(groups("b", "c"))]
    pub bar: Option<String>,
    #[reflect(groups("a", "b"))]
    pub foo_bar: Option<String>,
    #[reflect(groups("a"))]
    pub symfony: Option<String>,
}

// -----------------------------------------------------------------------------
// Graphs

#[derive(Reflect, Default)]
#[reflect(default)]
pub struct PropertyCircularReferenceDummy {
    me: Weak<PropertyCircularReferenceDummy>,
}

impl PropertyCircularReferenceDummy {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|me| Self { me: me.clone() })
    }
}

#[derive(Reflect, Debug)]
pub struct PropertySibling {
    coop_tilleuls: String,
}

#[derive(Reflect, Debug)]
pub struct PropertySiblingHolder {
    sibling0: Rc<PropertySibling>,
    sibling1: Rc<PropertySibling>,
    sibling2: Rc<PropertySibling>,
}

impl PropertySiblingHolder {
    pub fn new() -> Self {
        let sibling = Rc::new(PropertySibling {
            coop_tilleuls: "Les-Tilleuls.coop".into(),
        });
        Self {
            sibling0: Rc::clone(&sibling),
            sibling1: Rc::clone(&sibling),
            sibling2: sibling,
        }
    }
}
