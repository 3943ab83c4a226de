//! BERT text normalization.

use super::basic::strip_accents;
use super::Normalizer;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct BertNormalizerConfig {
    #[serde(default = "default_true")]
    pub clean_text: bool,
    #[serde(default = "default_true")]
    pub handle_chinese_chars: bool,
    /// Tri-state: `None` follows the `lowercase` flag.
    #[serde(default)]
    pub strip_accents: Option<bool>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

/// The BERT normalization stack: control-character cleanup, CJK padding,
/// case folding and accent stripping.
#[derive(Debug, Clone)]
pub struct BertNormalizer {
    config: BertNormalizerConfig,
}

// Cc/Cf/Co cover the control-ish categories BERT drops; surrogates cannot
// occur in a Rust `char`.
static CONTROL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Cc}\p{Cf}\p{Co}]").unwrap());

impl BertNormalizer {
    pub fn new(config: BertNormalizerConfig) -> Self {
        BertNormalizer { config }
    }

    fn clean_text(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if ch == '\u{0}' || ch == '\u{FFFD}' || is_control(ch, &mut buf) {
                continue;
            }
            if ch.is_whitespace() {
                output.push(' ');
            } else {
                output.push(ch);
            }
        }
        output
    }

    fn tokenize_chinese_chars(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for ch in text.chars() {
            if is_chinese_char(ch) {
                output.push(' ');
                output.push(ch);
                output.push(' ');
            } else {
                output.push(ch);
            }
        }
        output
    }
}

fn is_control(ch: char, buf: &mut [u8; 4]) -> bool {
    match ch {
        '\t' | '\n' | '\r' => false,
        _ => CONTROL.is_match(ch.encode_utf8(buf)),
    }
}

fn is_chinese_char(ch: char) -> bool {
    matches!(
        ch as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2B73F
            | 0x2B740..=0x2B81F
            | 0x2B820..=0x2CEAF
            | 0xF900..=0xFAFF
            | 0x2F800..=0x2FA1F
    )
}

impl Normalizer for BertNormalizer {
    fn normalize(&self, text: &str) -> String {
        let mut text = text.to_string();
        if self.config.clean_text {
            text = self.clean_text(&text);
        }
        if self.config.handle_chinese_chars {
            text = self.tokenize_chinese_chars(&text);
        }
        if self.config.lowercase {
            text = text.to_lowercase();
            if self.config.strip_accents != Some(false) {
                text = strip_accents(&text);
            }
        } else if self.config.strip_accents == Some(true) {
            text = strip_accents(&text);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bert(config: BertNormalizerConfig) -> BertNormalizer {
        BertNormalizer::new(config)
    }

    fn defaults() -> BertNormalizerConfig {
        BertNormalizerConfig {
            clean_text: true,
            handle_chinese_chars: true,
            strip_accents: None,
            lowercase: true,
        }
    }

    #[test]
    fn cleans_control_characters_and_folds_whitespace() {
        let normalizer = bert(BertNormalizerConfig {
            handle_chinese_chars: false,
            lowercase: false,
            ..defaults()
        });
        assert_eq!(normalizer.normalize("a\u{0}b\u{7}c\td"), "abc d");
    }

    #[test]
    fn pads_chinese_characters_with_spaces() {
        let normalizer = bert(BertNormalizerConfig {
            lowercase: false,
            ..defaults()
        });
        assert_eq!(normalizer.normalize("ab中c"), "ab 中 c");
    }

    #[test]
    fn lowercase_strips_accents_unless_disabled() {
        let normalizer = bert(defaults());
        assert_eq!(normalizer.normalize("Héllo"), "hello");

        let keep_accents = bert(BertNormalizerConfig {
            strip_accents: Some(false),
            ..defaults()
        });
        assert_eq!(keep_accents.normalize("Héllo"), "héllo");
    }

    #[test]
    fn strip_accents_without_lowercase() {
        let normalizer = bert(BertNormalizerConfig {
            lowercase: false,
            strip_accents: Some(true),
            ..defaults()
        });
        assert_eq!(normalizer.normalize("Héllo"), "Hello");
    }
}
