//! Small self-contained normalizers.

use super::Normalizer;
use serde::Deserialize;

/// Lowercases the input.
#[derive(Debug, Clone, Copy)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    #[serde(default = "default_true")]
    pub strip_left: bool,
    #[serde(default = "default_true")]
    pub strip_right: bool,
}

/// Strips leading and/or trailing whitespace.
#[derive(Debug, Clone)]
pub struct StripNormalizer {
    config: StripConfig,
}

impl StripNormalizer {
    pub fn new(config: StripConfig) -> Self {
        StripNormalizer { config }
    }
}

impl Normalizer for StripNormalizer {
    fn normalize(&self, text: &str) -> String {
        match (self.config.strip_left, self.config.strip_right) {
            (true, true) => text.trim().to_string(),
            (true, false) => text.trim_start().to_string(),
            (false, true) => text.trim_end().to_string(),
            (false, false) => text.to_string(),
        }
    }
}

/// Removes combining marks after canonical decomposition.
#[derive(Debug, Clone, Copy)]
pub struct StripAccents;

impl Normalizer for StripAccents {
    fn normalize(&self, text: &str) -> String {
        strip_accents(text)
    }
}

pub(crate) fn strip_accents(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    text.nfd()
        .filter(|ch| !('\u{0300}'..='\u{036f}').contains(ch))
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrependConfig {
    pub prepend: String,
}

/// Prepends a configured string to non-empty input.
#[derive(Debug, Clone)]
pub struct Prepend {
    config: PrependConfig,
}

impl Prepend {
    pub fn new(config: PrependConfig) -> Self {
        Prepend { config }
    }
}

impl Normalizer for Prepend {
    fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        format!("{}{}", self.config.prepend, text)
    }
}
