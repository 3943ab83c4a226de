//! Post-processing stages.
//!
//! A post-processor rearranges model tokens into their final form: special
//! tokens inserted around one or two sequences, segment type ids assigned.
//! Every stage receives the optional second sequence and the
//! add-special-tokens flag alongside the tokens themselves.

pub mod bert;
pub mod byte_level;
pub mod sequence;
pub mod template;

pub use bert::{BertProcessing, RobertaProcessing};
pub use byte_level::ByteLevelPostProcessor;
pub use sequence::PostProcessorSequence;
pub use template::TemplateProcessing;

use crate::config::{config_tag, variant_config, ConfigError};
use serde_json::Value;

const FAMILY: &str = "PostProcessor";

/// Result of post-processing: the final token sequence and, when the stage
/// produces them, segment type ids aligned with the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessedOutput {
    pub tokens: Vec<String>,
    pub token_type_ids: Option<Vec<u32>>,
}

impl PostProcessedOutput {
    /// Wraps tokens without type ids.
    pub fn tokens_only(tokens: Vec<String>) -> Self {
        PostProcessedOutput {
            tokens,
            token_type_ids: None,
        }
    }
}

/// Base contract for post-processing stages.
pub trait PostProcessor: Send + Sync {
    /// Post-process `tokens`, optionally paired with a second sequence.
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput;

    /// Invocation alias for [`PostProcessor::post_process`].
    fn call(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        self.post_process(tokens, tokens_pair, add_special_tokens)
    }
}

/// Builds a post-processor from its configuration node.
///
/// `Null` yields `None`; an unrecognized `type` tag fails at construction
/// time, naming both the tag and the family.
pub fn create_post_processor(
    config: &Value,
) -> Result<Option<Box<dyn PostProcessor>>, ConfigError> {
    if config.is_null() {
        return Ok(None);
    }
    let tag = config_tag(FAMILY, config)?;
    let post_processor: Box<dyn PostProcessor> = match tag {
        "TemplateProcessing" => Box::new(TemplateProcessing::new(variant_config(
            FAMILY, tag, config,
        )?)),
        "ByteLevel" => Box::new(ByteLevelPostProcessor),
        "BertProcessing" => Box::new(BertProcessing::new(variant_config(FAMILY, tag, config)?)),
        "RobertaProcessing" => {
            Box::new(RobertaProcessing::new(variant_config(FAMILY, tag, config)?))
        }
        "Sequence" => Box::new(PostProcessorSequence::from_config(config)?),
        _ => {
            return Err(ConfigError::UnknownTag {
                family: FAMILY,
                tag: tag.to_string(),
            })
        }
    };
    Ok(Some(post_processor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_config_builds_no_stage() {
        assert!(create_post_processor(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn unknown_tag_names_tag_and_family() {
        let err = create_post_processor(&json!({"type": "Bogus"})).err().unwrap();
        assert_eq!(err.to_string(), "Unknown PostProcessor type: Bogus");
    }
}
