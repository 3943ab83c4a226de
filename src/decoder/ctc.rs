//! CTC output decoding.

use super::Decoder;
use crate::bytes::clean_up_tokenization;
use serde::Deserialize;

fn default_pad() -> String {
    "<pad>".to_string()
}

fn default_delimiter() -> String {
    "|".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct CtcConfig {
    #[serde(default = "default_pad")]
    pub pad_token: String,
    #[serde(default = "default_delimiter")]
    pub word_delimiter_token: String,
    #[serde(default = "default_true")]
    pub cleanup: bool,
}

/// Collapses CTC frame output: repeated tokens merge, padding drops out,
/// the word delimiter becomes a space.
#[derive(Debug, Clone)]
pub struct CtcDecoder {
    config: CtcConfig,
}

impl CtcDecoder {
    pub fn new(config: CtcConfig) -> Self {
        CtcDecoder { config }
    }

    fn convert_tokens_to_string(&self, tokens: &[String]) -> String {
        let mut grouped: Vec<&str> = Vec::new();
        for token in tokens {
            if grouped.last() != Some(&token.as_str()) {
                grouped.push(token);
            }
        }
        let text: String = grouped
            .into_iter()
            .filter(|token| *token != self.config.pad_token)
            .collect();
        if self.config.cleanup {
            clean_up_tokenization(&text)
                .replace(&self.config.word_delimiter_token, " ")
                .trim()
                .to_string()
        } else {
            text
        }
    }
}

impl Decoder for CtcDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        vec![self.convert_tokens_to_string(&tokens)]
    }
}
