//! Small token-chain decoders.

use super::Decoder;
use crate::config::{ConfigError, Matcher, PatternConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceDecoderConfig {
    pub pattern: PatternConfig,
    pub content: String,
}

/// Applies a pattern replacement to every token.
#[derive(Debug, Clone)]
pub struct ReplaceDecoder {
    matcher: Matcher,
    content: String,
}

impl ReplaceDecoder {
    pub fn from_config(config: ReplaceDecoderConfig) -> Result<Self, ConfigError> {
        Ok(ReplaceDecoder {
            matcher: Matcher::compile(&config.pattern)?,
            content: config.content,
        })
    }
}

impl Decoder for ReplaceDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| self.matcher.replace_all(&token, &self.content))
            .collect()
    }
}

/// Fuses the whole chain into one token.
#[derive(Debug, Clone, Copy)]
pub struct FuseDecoder;

impl Decoder for FuseDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        vec![tokens.concat()]
    }
}

fn char_content<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let content = String::deserialize(deserializer)?;
    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(D::Error::custom("strip content must be a single character")),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripDecoderConfig {
    #[serde(deserialize_with = "char_content")]
    pub content: char,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub stop: usize,
}

/// Strips up to `start` leading and `stop` trailing copies of a character
/// from every token.
#[derive(Debug, Clone)]
pub struct StripDecoder {
    config: StripDecoderConfig,
}

impl StripDecoder {
    pub fn new(config: StripDecoderConfig) -> Self {
        StripDecoder { config }
    }

    fn strip(&self, token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        let mut start_cut = 0;
        for i in 0..self.config.start.min(chars.len()) {
            if chars[i] == self.config.content {
                start_cut = i + 1;
            } else {
                break;
            }
        }
        let mut stop_cut = chars.len();
        for i in 0..self.config.stop {
            let Some(index) = chars.len().checked_sub(i + 1) else {
                break;
            };
            if index < start_cut {
                break;
            }
            if chars[index] == self.config.content {
                stop_cut = index;
            } else {
                break;
            }
        }
        chars[start_cut..stop_cut.max(start_cut)].iter().collect()
    }
}

impl Decoder for StripDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.iter().map(|token| self.strip(token)).collect()
    }
}

/// Collects `<0xNN>` byte tokens and flushes them as (lossy) UTF-8 between
/// ordinary tokens.
#[derive(Debug, Clone, Copy)]
pub struct ByteFallback;

fn parse_byte_token(token: &str) -> Option<u8> {
    let hex = token.strip_prefix("<0x")?.strip_suffix('>')?;
    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

impl Decoder for ByteFallback {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        let mut out = Vec::new();
        let mut pending: Vec<u8> = Vec::new();
        for token in tokens {
            match parse_byte_token(&token) {
                Some(byte) => pending.push(byte),
                None => {
                    if !pending.is_empty() {
                        out.push(String::from_utf8_lossy(&pending).into_owned());
                        pending.clear();
                    }
                    out.push(token);
                }
            }
        }
        if !pending.is_empty() {
            out.push(String::from_utf8_lossy(&pending).into_owned());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replace_rewrites_every_token() {
        let decoder = ReplaceDecoder::from_config(ReplaceDecoderConfig {
            pattern: PatternConfig::String("▁".into()),
            content: " ".into(),
        })
        .unwrap();
        assert_eq!(
            decoder.decode_chain(strings(&["▁a", "▁b"])),
            strings(&[" a", " b"])
        );
    }

    #[test]
    fn fuse_produces_a_single_token() {
        assert_eq!(
            FuseDecoder.decode_chain(strings(&["a", "b", "c"])),
            strings(&["abc"])
        );
    }

    #[test]
    fn strip_removes_bounded_runs() {
        let decoder = StripDecoder::new(StripDecoderConfig {
            content: '_',
            start: 2,
            stop: 1,
        });
        assert_eq!(
            decoder.decode_chain(strings(&["___x___", "_y_", "z"])),
            strings(&["_x__", "y", "z"])
        );
    }

    #[test]
    fn byte_fallback_reassembles_utf8() {
        // "é" is 0xC3 0xA9.
        let tokens = strings(&["a", "<0xC3>", "<0xA9>", "b"]);
        assert_eq!(ByteFallback.decode_chain(tokens), strings(&["a", "é", "b"]));
    }

    #[test]
    fn invalid_byte_sequences_decode_lossily() {
        let tokens = strings(&["<0xFF>"]);
        assert_eq!(
            ByteFallback.decode_chain(tokens),
            strings(&["\u{FFFD}"])
        );
    }

    #[test]
    fn non_byte_tokens_pass_through_untouched() {
        let tokens = strings(&["<0xZZ>", "<0x123>", "ok"]);
        assert_eq!(
            ByteFallback.decode_chain(tokens.clone()),
            tokens
        );
    }
}
