use serde::{Deserialize, Serialize};

use crate::PropertyNormalizer;
use crate::circular::{CircularReferenceScope, DEFAULT_CIRCULAR_REFERENCE_LIMIT};
use crate::name::{CamelCaseToSnakeCase, IdentityConverter, SnakeCaseToCamelCase};

/// The data-only settings of a [`PropertyNormalizer`].
///
/// Callbacks, handlers and collaborators are code and are set on the
/// normalizer directly.
///
/// ```
/// use pn_normalizer::{NameConverterConfig, NormalizerConfig, PropertyNormalizer};
///
/// let config = NormalizerConfig {
///     ignored_attributes: vec!["password".into()],
///     circular_reference_limit: 2,
///     name_converter: NameConverterConfig::CamelCase { attributes: None },
///     ..Default::default()
/// };
/// let normalizer = PropertyNormalizer::from_config(&config);
/// assert_eq!(normalizer.circular_reference_limit(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    pub ignored_attributes: Vec<String>,
    pub circular_reference_limit: usize,
    pub circular_reference_scope: CircularReferenceScope,
    pub name_converter: NameConverterConfig,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            ignored_attributes: Vec::new(),
            circular_reference_limit: DEFAULT_CIRCULAR_REFERENCE_LIMIT,
            circular_reference_scope: CircularReferenceScope::default(),
            name_converter: NameConverterConfig::default(),
        }
    }
}

/// Which [`NameConverter`](crate::name::NameConverter) to install.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NameConverterConfig {
    #[default]
    Identity,
    /// camelCase declared names, snake_case external names.
    SnakeCase {
        #[serde(default)]
        attributes: Option<Vec<String>>,
    },
    /// snake_case declared names, camelCase external names.
    CamelCase {
        #[serde(default)]
        attributes: Option<Vec<String>>,
    },
}

impl PropertyNormalizer {
    /// A normalizer without group metadata, set up from `config`.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut normalizer = Self::new();
        normalizer.apply_config(config);
        normalizer
    }

    /// Overwrite the data-only settings with those of `config`.
    pub fn apply_config(&mut self, config: &NormalizerConfig) -> &mut Self {
        self.set_ignored_attributes(config.ignored_attributes.iter().cloned())
            .set_circular_reference_limit(config.circular_reference_limit)
            .set_circular_reference_scope(config.circular_reference_scope);

        match &config.name_converter {
            NameConverterConfig::Identity => self.set_name_converter(IdentityConverter),
            NameConverterConfig::SnakeCase { attributes: None } => {
                self.set_name_converter(CamelCaseToSnakeCase::new())
            }
            NameConverterConfig::SnakeCase {
                attributes: Some(list),
            } => self.set_name_converter(CamelCaseToSnakeCase::with_attributes(list.iter().cloned())),
            NameConverterConfig::CamelCase { attributes: None } => {
                self.set_name_converter(SnakeCaseToCamelCase::new())
            }
            NameConverterConfig::CamelCase {
                attributes: Some(list),
            } => self.set_name_converter(SnakeCaseToCamelCase::with_attributes(list.iter().cloned())),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
