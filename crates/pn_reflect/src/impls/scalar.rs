use crate::{Denormalizer, FromValue, Reflect, ReflectError, ReflectRef, Value};

macro_rules! impl_reflect_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Value(Value::from(self.clone()))
            }
        }
    )*};
}

macro_rules! impl_from_value_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromValue for $ty {
            fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
                let converted = match value {
                    Value::Int(i) => <$ty>::try_from(i).ok(),
                    Value::UInt(u) => <$ty>::try_from(u).ok(),
                    _ => None,
                };
                converted.ok_or_else(|| ReflectError::invalid::<$ty>(&value))
            }
        }
    )*};
}

impl_reflect_scalar!(
    bool, char, (), String, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl_from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Reflect for &'static str {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Value(Value::from(*self))
    }
}

impl FromValue for bool {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        value.as_bool().ok_or_else(|| ReflectError::invalid::<bool>(&value))
    }
}

impl FromValue for f64 {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        value.as_f64().ok_or_else(|| ReflectError::invalid::<f64>(&value))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value.as_f64() {
            Some(f) => Ok(f as f32),
            None => Err(ReflectError::invalid::<f32>(&value)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ReflectError::invalid::<String>(&other)),
        }
    }
}

impl FromValue for char {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        if let Some(s) = value.as_str() {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        Err(ReflectError::invalid::<char>(&value))
    }
}

impl FromValue for () {
    fn from_value(value: Value, _: &mut dyn Denormalizer) -> Result<Self, ReflectError> {
        match value {
            Value::Null => Ok(()),
            other => Err(ReflectError::invalid::<()>(&other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
