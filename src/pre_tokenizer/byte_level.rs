//! Byte-level pre-tokenization.
//!
//! Splits with the GPT-2 pattern, then remaps every byte of every piece to
//! its printable stand-in so downstream vocabularies never see raw bytes.
//! The split pattern needs a negative lookahead (`\s+(?!\S)` keeps trailing
//! whitespace runs attached), which is why it is compiled with
//! `fancy_regex` rather than `regex`.

use super::PreTokenizer;
use crate::bytes::bytes_to_unicode;
use fancy_regex::Regex;
use once_cell::sync::Lazy;
use serde::Deserialize;

static GPT2_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+")
        .unwrap()
});

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ByteLevelConfig {
    #[serde(default = "default_true")]
    pub add_prefix_space: bool,
    #[serde(default = "default_true")]
    pub use_regex: bool,
}

/// GPT-2-style byte-level splitter.
#[derive(Debug, Clone)]
pub struct ByteLevelPreTokenizer {
    config: ByteLevelConfig,
}

impl ByteLevelPreTokenizer {
    pub fn new(config: ByteLevelConfig) -> Self {
        ByteLevelPreTokenizer { config }
    }
}

impl PreTokenizer for ByteLevelPreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        let text = if self.config.add_prefix_space && !text.starts_with(' ') {
            format!(" {text}")
        } else {
            text.to_string()
        };
        if self.config.use_regex {
            GPT2_SPLIT
                .find_iter(&text)
                .flatten()
                .map(|m| bytes_to_unicode(m.as_str()))
                .collect()
        } else {
            vec![bytes_to_unicode(&text)]
        }
    }
}
