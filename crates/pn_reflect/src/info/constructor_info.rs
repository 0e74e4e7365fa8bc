use core::fmt;

use crate::{Denormalizer, Object, ReflectError, Value};

/// Call the constructor with one argument per parameter, in order.
pub type ConstructorFn = fn(Vec<Value>, &mut dyn Denormalizer) -> Result<Box<dyn Object>, ReflectError>;

/// A constructor parameter.
#[derive(Clone, Copy)]
pub struct ParamInfo {
    name: &'static str,
    default: Option<fn() -> Value>,
}

impl ParamInfo {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, default: None }
    }

    #[inline]
    pub const fn with_default(mut self, default: fn() -> Value) -> Self {
        self.default = Some(default);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Evaluate the default value, if the parameter declares one.
    #[inline]
    pub fn default_value(&self) -> Option<Value> {
        self.default.map(|f| f())
    }
}

impl fmt::Debug for ParamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamInfo")
            .field("name", &self.name)
            .field("has_default", &self.has_default())
            .finish()
    }
}

/// The parameters of a struct's constructor, declared with
/// `#[reflect(constructor = new(a, b = 1))]`.
///
/// Parameters are matched to incoming data by name, so each parameter
/// name should also be an attribute name.
#[derive(Clone)]
pub struct ConstructorInfo {
    params: Box<[ParamInfo]>,
    construct: ConstructorFn,
}

impl ConstructorInfo {
    pub fn new(params: &[ParamInfo], construct: ConstructorFn) -> Self {
        Self {
            params: params.into(),
            construct,
        }
    }

    #[inline]
    pub fn params(&self) -> &[ParamInfo] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&ParamInfo> {
        self.params.iter().find(|p| p.name == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Invoke the constructor.
    ///
    /// Missing trailing arguments are passed as [`Value::Null`].
    #[inline]
    pub fn construct(
        &self,
        args: Vec<Value>,
        de: &mut dyn Denormalizer,
    ) -> Result<Box<dyn Object>, ReflectError> {
        (self.construct)(args, de)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.params.iter()).finish()
    }
}
