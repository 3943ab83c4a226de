//! WordPiece and BPE suffix decoding.

use super::Decoder;
use crate::bytes::clean_up_tokenization;
use serde::Deserialize;

fn default_prefix() -> String {
    "##".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordPieceConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_true")]
    pub cleanup: bool,
}

/// Joins WordPiece tokens: continuation tokens lose their prefix, word
/// starts gain a separating space.
#[derive(Debug, Clone)]
pub struct WordPieceDecoder {
    config: WordPieceConfig,
}

impl WordPieceDecoder {
    pub fn new(config: WordPieceConfig) -> Self {
        WordPieceDecoder { config }
    }
}

impl Decoder for WordPieceDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let mut token = if i != 0 {
                    match token.strip_prefix(&self.config.prefix) {
                        Some(stripped) => stripped.to_string(),
                        None => format!(" {token}"),
                    }
                } else {
                    token
                };
                if self.config.cleanup {
                    token = clean_up_tokenization(&token);
                }
                token
            })
            .collect()
    }
}

fn default_suffix() -> String {
    "</w>".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BpeDecoderConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

/// Turns a configured end-of-word suffix into spaces, dropping it on the
/// final token.
#[derive(Debug, Clone)]
pub struct BpeDecoder {
    config: BpeDecoderConfig,
}

impl BpeDecoder {
    pub fn new(config: BpeDecoderConfig) -> Self {
        BpeDecoder { config }
    }
}

impl Decoder for BpeDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        let last = tokens.len().saturating_sub(1);
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let replacement = if i == last { "" } else { " " };
                token.replace(&self.config.suffix, replacement)
            })
            .collect()
    }
}
