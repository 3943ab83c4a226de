//! Sequential composition of normalizers.

use super::{create_normalizer, Normalizer};
use crate::config::{variant_config, ConfigError};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
struct SequenceConfig {
    #[serde(default)]
    normalizers: Vec<Value>,
}

/// Applies child normalizers in order, each consuming the previous child's
/// output. Null children are skipped.
pub struct NormalizerSequence {
    normalizers: Vec<Option<Box<dyn Normalizer>>>,
}

impl NormalizerSequence {
    pub fn from_config(config: &Value) -> Result<Self, ConfigError> {
        let config: SequenceConfig = variant_config("Normalizer", "Sequence", config)?;
        let normalizers = config
            .normalizers
            .iter()
            .map(create_normalizer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NormalizerSequence { normalizers })
    }
}

impl Normalizer for NormalizerSequence {
    fn normalize(&self, text: &str) -> String {
        self.normalizers
            .iter()
            .fold(text.to_string(), |text, child| match child {
                Some(normalizer) => normalizer.normalize(&text),
                None => text,
            })
    }
}
