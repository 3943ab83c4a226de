//! Byte-level post-processing.

use super::{PostProcessedOutput, PostProcessor};

/// Concatenates the pair sequence after the first; byte-level models take
/// no special tokens here.
#[derive(Debug, Clone, Copy)]
pub struct ByteLevelPostProcessor;

impl PostProcessor for ByteLevelPostProcessor {
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        _add_special_tokens: bool,
    ) -> PostProcessedOutput {
        let mut tokens = tokens;
        if let Some(pair) = tokens_pair {
            tokens.extend(pair.iter().cloned());
        }
        PostProcessedOutput::tokens_only(tokens)
    }
}
