//! Pattern-driven splitting.

use super::PreTokenizer;
use crate::config::{ConfigError, Matcher, PatternConfig, SplitBehavior};
use serde::Deserialize;
use std::ops::Range;

#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    pub pattern: PatternConfig,
    pub behavior: SplitBehavior,
    #[serde(default)]
    pub invert: bool,
}

/// Splits on a configured pattern with one of the five delimiter
/// behaviors; inverted, it keeps the matches instead of the gaps.
#[derive(Debug, Clone)]
pub struct SplitPreTokenizer {
    matcher: Matcher,
    behavior: SplitBehavior,
    invert: bool,
}

impl SplitPreTokenizer {
    pub fn from_config(config: SplitConfig) -> Result<Self, ConfigError> {
        Ok(SplitPreTokenizer {
            matcher: Matcher::compile(&config.pattern)?,
            behavior: config.behavior,
            invert: config.invert,
        })
    }
}

impl PreTokenizer for SplitPreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        let ranges = self.matcher.find_ranges(text);
        if self.invert {
            return ranges
                .into_iter()
                .map(|range| text[range].to_string())
                .collect();
        }
        split_by_ranges(text, &ranges, self.behavior)
    }
}

/// Partitions `text` around the matched `ranges` according to `behavior`.
/// Gaps that come out empty are dropped; delimiter pieces are kept, merged
/// or removed as the behavior dictates.
pub(crate) fn split_by_ranges(
    text: &str,
    ranges: &[Range<usize>],
    behavior: SplitBehavior,
) -> Vec<String> {
    let mut pieces = Vec::new();
    match behavior {
        SplitBehavior::Removed => {
            let mut cursor = 0;
            for range in ranges {
                if range.start > cursor {
                    pieces.push(text[cursor..range.start].to_string());
                }
                cursor = range.end;
            }
            if cursor < text.len() {
                pieces.push(text[cursor..].to_string());
            }
        }
        SplitBehavior::Isolated => {
            let mut cursor = 0;
            for range in ranges {
                if range.start > cursor {
                    pieces.push(text[cursor..range.start].to_string());
                }
                pieces.push(text[range.clone()].to_string());
                cursor = range.end;
            }
            if cursor < text.len() {
                pieces.push(text[cursor..].to_string());
            }
        }
        SplitBehavior::MergedWithPrevious => {
            let mut cursor = 0;
            for range in ranges {
                pieces.push(text[cursor..range.end].to_string());
                cursor = range.end;
            }
            if cursor < text.len() {
                pieces.push(text[cursor..].to_string());
            }
        }
        SplitBehavior::MergedWithNext => {
            if let Some(first) = ranges.first() {
                if first.start > 0 {
                    pieces.push(text[..first.start].to_string());
                }
                for (i, range) in ranges.iter().enumerate() {
                    let end = ranges
                        .get(i + 1)
                        .map_or(text.len(), |next| next.start);
                    pieces.push(text[range.start..end].to_string());
                }
            } else if !text.is_empty() {
                pieces.push(text.to_string());
            }
        }
        SplitBehavior::Contiguous => {
            // Adjacent matches fuse into one delimiter piece first.
            let mut merged: Vec<Range<usize>> = Vec::new();
            for range in ranges {
                match merged.last_mut() {
                    Some(last) if last.end == range.start => last.end = range.end,
                    _ => merged.push(range.clone()),
                }
            }
            return split_by_ranges(text, &merged, SplitBehavior::Isolated);
        }
    }
    pieces
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplacePreTokenizerConfig {
    pub pattern: PatternConfig,
    pub content: String,
}

/// Rewrites the text through a pattern replacement and passes it on as a
/// single piece.
#[derive(Debug, Clone)]
pub struct ReplacePreTokenizer {
    matcher: Matcher,
    content: String,
}

impl ReplacePreTokenizer {
    pub fn from_config(config: ReplacePreTokenizerConfig) -> Result<Self, ConfigError> {
        Ok(ReplacePreTokenizer {
            matcher: Matcher::compile(&config.pattern)?,
            content: config.content,
        })
    }
}

impl PreTokenizer for ReplacePreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        vec![self.matcher.replace_all(text, &self.content)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn splitter(behavior: SplitBehavior, invert: bool) -> SplitPreTokenizer {
        SplitPreTokenizer::from_config(SplitConfig {
            pattern: PatternConfig::String("-".into()),
            behavior,
            invert,
        })
        .unwrap()
    }

    #[rstest]
    #[case(SplitBehavior::Removed, vec!["the", "final", "countdown"])]
    #[case(SplitBehavior::Isolated, vec!["the", "-", "final", "-", "-", "countdown"])]
    #[case(SplitBehavior::MergedWithPrevious, vec!["the-", "final-", "-", "countdown"])]
    #[case(SplitBehavior::MergedWithNext, vec!["the", "-final", "-", "-countdown"])]
    #[case(SplitBehavior::Contiguous, vec!["the", "-", "final", "--", "countdown"])]
    fn delimiter_behaviors(#[case] behavior: SplitBehavior, #[case] expected: Vec<&str>) {
        assert_eq!(
            splitter(behavior, false).pre_tokenize_text("the-final--countdown"),
            expected
        );
    }

    #[test]
    fn invert_keeps_the_matches() {
        let stage = SplitPreTokenizer::from_config(SplitConfig {
            pattern: PatternConfig::Regex(r"\d+".into()),
            behavior: SplitBehavior::Removed,
            invert: true,
        })
        .unwrap();
        assert_eq!(stage.pre_tokenize_text("a12b345"), vec!["12", "345"]);
    }

    #[test]
    fn no_matches_passes_text_through() {
        assert_eq!(
            splitter(SplitBehavior::Removed, false).pre_tokenize_text("plain"),
            vec!["plain"]
        );
        assert_eq!(
            splitter(SplitBehavior::MergedWithNext, false).pre_tokenize_text("plain"),
            vec!["plain"]
        );
    }

    #[test]
    fn replace_rewrites_into_one_piece() {
        let stage = ReplacePreTokenizer::from_config(ReplacePreTokenizerConfig {
            pattern: PatternConfig::String("\n".into()),
            content: " ".into(),
        })
        .unwrap();
        assert_eq!(stage.pre_tokenize_text("a\nb"), vec!["a b"]);
    }
}
