use std::collections::BTreeMap;

use pn_utils::index::IndexMap;

use crate::{Denormalizer, FromValue, Mapping, Reflect, ReflectError, ReflectRef, Value};

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect> Reflect for Option<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Value(Value::Null),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value, de).map(Some),
        }
    }
}

// -----------------------------------------------------------------------------
// Sequences

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value {
            Value::Seq(items) => items.into_iter().map(|v| T::from_value(v, de)).collect(),
            other => Err(ReflectError::invalid::<Self>(&other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Maps

fn entries<T: FromValue>(
    value: Value,
    de: &mut dyn Denormalizer,
    expected: fn(&Value) -> ReflectError,
) -> Result<impl Iterator<Item = Result<(String, T), ReflectError>>, ReflectError> {
    match value {
        Value::Map(map) => Ok(map
            .into_iter()
            .map(move |(k, v)| T::from_value(v, de).map(|v| (k, v)))),
        other => Err(expected(&other)),
    }
}

impl<T: Reflect> Reflect for BTreeMap<String, T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(
            self.iter()
                .map(|(k, v)| (k.as_str(), v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        entries(value, de, ReflectError::invalid::<Self>)?.collect()
    }
}

impl<T: Reflect> Reflect for IndexMap<String, T> {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(
            self.iter()
                .map(|(k, v)| (k.as_str(), v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<T: FromValue> FromValue for IndexMap<String, T> {
    fn from_value(value: Value, de: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        entries(value, de, ReflectError::invalid::<Self>)?.collect()
    }
}

// -----------------------------------------------------------------------------
// Plain data

impl Reflect for Value {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Value(self.clone())
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        Ok(value)
    }
}

impl Reflect for Mapping {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Value(Value::Map(self.clone()))
    }
}

impl FromValue for Mapping {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(ReflectError::invalid::<Self>(&other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
