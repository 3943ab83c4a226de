//! Template-driven post-processing.

use super::{PostProcessedOutput, PostProcessor};
use serde::Deserialize;

/// Which input sequence a template piece refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SequenceRef {
    A,
    B,
}

/// One element of a processing template.
#[derive(Debug, Clone, Deserialize)]
pub enum TemplatePiece {
    SpecialToken { id: String, type_id: u32 },
    Sequence { id: SequenceRef, type_id: u32 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateProcessingConfig {
    #[serde(default)]
    pub single: Vec<TemplatePiece>,
    #[serde(default)]
    pub pair: Vec<TemplatePiece>,
}

/// Assembles the output by walking a declarative template: the `single`
/// template for one sequence, the `pair` template when a second sequence is
/// present. Special tokens are emitted only when requested.
#[derive(Debug, Clone)]
pub struct TemplateProcessing {
    config: TemplateProcessingConfig,
}

impl TemplateProcessing {
    pub fn new(config: TemplateProcessingConfig) -> Self {
        TemplateProcessing { config }
    }
}

impl PostProcessor for TemplateProcessing {
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        let template = if tokens_pair.is_none() {
            &self.config.single
        } else {
            &self.config.pair
        };

        let mut out_tokens = Vec::new();
        let mut type_ids = Vec::new();
        for piece in template {
            match piece {
                TemplatePiece::SpecialToken { id, type_id } => {
                    if add_special_tokens {
                        out_tokens.push(id.clone());
                        type_ids.push(*type_id);
                    }
                }
                TemplatePiece::Sequence { id: SequenceRef::A, type_id } => {
                    type_ids.extend(std::iter::repeat(*type_id).take(tokens.len()));
                    out_tokens.extend(tokens.iter().cloned());
                }
                TemplatePiece::Sequence { id: SequenceRef::B, type_id } => {
                    if let Some(pair) = tokens_pair {
                        type_ids.extend(std::iter::repeat(*type_id).take(pair.len()));
                        out_tokens.extend(pair.iter().cloned());
                    }
                }
            }
        }
        PostProcessedOutput {
            tokens: out_tokens,
            token_type_ids: Some(type_ids),
        }
    }
}
