//! Pattern replacement normalization.

use super::Normalizer;
use crate::config::{ConfigError, Matcher, PatternConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceConfig {
    pub pattern: PatternConfig,
    pub content: String,
}

/// Replaces every occurrence of a configured pattern with fixed content.
#[derive(Debug, Clone)]
pub struct ReplaceNormalizer {
    matcher: Matcher,
    content: String,
}

impl ReplaceNormalizer {
    pub fn from_config(config: ReplaceConfig) -> Result<Self, ConfigError> {
        Ok(ReplaceNormalizer {
            matcher: Matcher::compile(&config.pattern)?,
            content: config.content,
        })
    }
}

impl Normalizer for ReplaceNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.matcher.replace_all(text, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_literal_patterns() {
        let normalizer = ReplaceNormalizer::from_config(ReplaceConfig {
            pattern: PatternConfig::String(" ".into()),
            content: "▁".into(),
        })
        .unwrap();
        assert_eq!(normalizer.normalize("a b c"), "a▁b▁c");
    }

    #[test]
    fn replaces_regex_patterns() {
        let normalizer = ReplaceNormalizer::from_config(ReplaceConfig {
            pattern: PatternConfig::Regex(r"\s+".into()),
            content: " ".into(),
        })
        .unwrap();
        assert_eq!(normalizer.normalize("a \t b\n\nc"), "a b c");
    }
}
