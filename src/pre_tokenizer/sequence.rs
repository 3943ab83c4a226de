//! Sequential composition of pre-tokenizers.

use super::{create_pre_tokenizer, PreTokenizer};
use crate::config::{variant_config, ConfigError};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
struct SequenceConfig {
    #[serde(default)]
    pretokenizers: Vec<Value>,
}

/// Applies child pre-tokenizers in order; each child re-splits the pieces
/// produced by the previous one. Null children are skipped.
pub struct PreTokenizerSequence {
    tokenizers: Vec<Option<Box<dyn PreTokenizer>>>,
}

impl PreTokenizerSequence {
    pub fn from_config(config: &Value) -> Result<Self, ConfigError> {
        let config: SequenceConfig = variant_config("PreTokenizer", "Sequence", config)?;
        let tokenizers = config
            .pretokenizers
            .iter()
            .map(create_pre_tokenizer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PreTokenizerSequence { tokenizers })
    }
}

impl PreTokenizer for PreTokenizerSequence {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        self.tokenizers
            .iter()
            .fold(vec![text.to_string()], |pieces, child| match child {
                Some(tokenizer) => tokenizer.pre_tokenize(pieces),
                None => pieces,
            })
    }
}
