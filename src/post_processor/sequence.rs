//! Sequential composition of post-processors.

use super::{create_post_processor, PostProcessedOutput, PostProcessor};
use crate::config::{variant_config, ConfigError};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
struct SequenceConfig {
    #[serde(default)]
    processors: Vec<Value>,
}

/// Applies child post-processors in order. Tokens thread from child to
/// child, while every child receives the ORIGINAL pair sequence and
/// add-special-tokens flag unchanged; the last child's output wins
/// wholesale. Null children are skipped.
pub struct PostProcessorSequence {
    processors: Vec<Option<Box<dyn PostProcessor>>>,
}

impl PostProcessorSequence {
    pub fn from_config(config: &Value) -> Result<Self, ConfigError> {
        let config: SequenceConfig = variant_config("PostProcessor", "Sequence", config)?;
        let processors = config
            .processors
            .iter()
            .map(create_post_processor)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PostProcessorSequence { processors })
    }
}

impl PostProcessor for PostProcessorSequence {
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        let mut processed = PostProcessedOutput::tokens_only(tokens);
        for processor in self.processors.iter().flatten() {
            processed = processor.post_process(processed.tokens, tokens_pair, add_special_tokens);
        }
        processed
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
    fn threads_tokens_and_repeats_original_arguments() {
        let sequence = PostProcessorSequence::from_config(&json!({
            "type": "Sequence",
            "processors": [
                {"type": "ByteLevel"},
                {"type": "BertProcessing", "cls": ["[CLS]", 101], "sep": ["[SEP]", 102]},
            ],
        }))
        .unwrap();
        let pair = strings(&["p"]);
        let output = sequence.post_process(strings(&["a"]), Some(&pair), true);
        // ByteLevel already appended the pair; BertProcessing receives the
        // original pair again, unchanged.
        assert_eq!(
            output.tokens,
            strings(&["[CLS]", "a", "p", "[SEP]", "p", "[SEP]"])
        );
    }

    #[test]
    fn empty_sequence_passes_tokens_through() {
        let sequence =
            PostProcessorSequence::from_config(&json!({"type": "Sequence"})).unwrap();
        let output = sequence.post_process(strings(&["a"]), None, true);
        assert_eq!(output.tokens, strings(&["a"]));
        assert_eq!(output.token_type_ids, None);
    }
}
