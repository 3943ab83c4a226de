//! BERT pre-tokenization.

use super::{PreTokenizer, PUNCT_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;

static BERT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^\\s{PUNCT_CLASS}]+|[{PUNCT_CLASS}]")).unwrap()
});

/// Splits trimmed text into word runs and single punctuation characters.
#[derive(Debug, Clone, Copy)]
pub struct BertPreTokenizer;

impl PreTokenizer for BertPreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        BERT_PATTERN
            .find_iter(text.trim())
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
