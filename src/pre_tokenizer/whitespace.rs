//! Whitespace-driven pre-tokenizers.

use super::PreTokenizer;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_OR_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").unwrap());

/// Splits into word runs and symbol runs, discarding whitespace.
#[derive(Debug, Clone, Copy)]
pub struct WhitespacePreTokenizer;

impl PreTokenizer for WhitespacePreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        WORD_OR_SYMBOL
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Splits on whitespace runs only.
#[derive(Debug, Clone, Copy)]
pub struct WhitespaceSplit;

impl PreTokenizer for WhitespaceSplit {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
