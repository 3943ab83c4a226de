//! Punctuation and digit splitting.

use super::{PreTokenizer, PUNCT_CLASS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static PUNCT_RUNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^{PUNCT_CLASS}]+|[{PUNCT_CLASS}]+")).unwrap()
});

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+|\d+").unwrap());
static SINGLE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+|\d").unwrap());

/// Separates punctuation runs from everything else.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationPreTokenizer;

impl PreTokenizer for PunctuationPreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        PUNCT_RUNS
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DigitsConfig {
    #[serde(default)]
    pub individual_digits: bool,
}

/// Splits digits away from other text, optionally digit by digit.
#[derive(Debug, Clone)]
pub struct DigitsPreTokenizer {
    config: DigitsConfig,
}

impl DigitsPreTokenizer {
    pub fn new(config: DigitsConfig) -> Self {
        DigitsPreTokenizer { config }
    }
}

impl PreTokenizer for DigitsPreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        let pattern = if self.config.individual_digits {
            &SINGLE_DIGITS
        } else {
            &DIGIT_RUNS
        };
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_groups_into_runs() {
        assert_eq!(
            PunctuationPreTokenizer.pre_tokenize_text("wait... what?!"),
            vec!["wait", "...", " what", "?!"]
        );
    }

    #[test]
    fn digits_split_as_runs_by_default() {
        let stage = DigitsPreTokenizer::new(DigitsConfig {
            individual_digits: false,
        });
        assert_eq!(stage.pre_tokenize_text("ab123cd"), vec!["ab", "123", "cd"]);
    }

    #[test]
    fn individual_digits_split_one_by_one() {
        let stage = DigitsPreTokenizer::new(DigitsConfig {
            individual_digits: true,
        });
        assert_eq!(
            stage.pre_tokenize_text("ab123cd"),
            vec!["ab", "1", "2", "3", "cd"]
        );
    }
}
