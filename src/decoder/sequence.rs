//! Sequential composition of decoders.

use super::{create_decoder, Decoder};
use crate::config::{variant_config, ConfigError};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
struct SequenceConfig {
    #[serde(default)]
    decoders: Vec<Value>,
}

/// Threads the token chain through child decoders in order. Null children
/// are skipped.
pub struct DecoderSequence {
    decoders: Vec<Option<Box<dyn Decoder>>>,
}

impl DecoderSequence {
    pub fn from_config(config: &Value) -> Result<Self, ConfigError> {
        let config: SequenceConfig = variant_config("Decoder", "Sequence", config)?;
        let decoders = config
            .decoders
            .iter()
            .map(create_decoder)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DecoderSequence { decoders })
    }
}

impl Decoder for DecoderSequence {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        self.decoders
            .iter()
            .flatten()
            .fold(tokens, |tokens, decoder| decoder.decode_chain(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn chains_children_in_order() {
        let sequence = DecoderSequence::from_config(&json!({
            "type": "Sequence",
            "decoders": [
                {"type": "Replace", "pattern": {"String": "▁"}, "content": " "},
                {"type": "Fuse"},
                {"type": "Strip", "content": " ", "start": 1, "stop": 0},
            ],
        }))
        .unwrap();
        assert_eq!(
            sequence.decode(strings(&["▁hey", "▁there"])),
            "hey there"
        );
    }

    #[test]
    fn null_children_are_skipped() {
        let sequence = DecoderSequence::from_config(&json!({
            "type": "Sequence",
            "decoders": [null, {"type": "Fuse"}],
        }))
        .unwrap();
        assert_eq!(sequence.decode_chain(strings(&["a", "b"])), strings(&["ab"]));
    }

    #[test]
    fn bad_child_fails_construction() {
        let err = DecoderSequence::from_config(&json!({
            "type": "Sequence",
            "decoders": [{"type": "Nope"}],
        }))
        .err().unwrap();
        assert_eq!(err.to_string(), "Unknown Decoder type: Nope");
    }
}
