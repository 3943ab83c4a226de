//! Metaspace pre-tokenization.

use super::PreTokenizer;
use serde::Deserialize;

fn default_replacement() -> String {
    "\u{2581}".to_string()
}

fn default_true() -> bool {
    true
}

/// When the replacement marker is prepended to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrependScheme {
    Always,
    Never,
    /// First section only. Sections are not modeled here, so this behaves
    /// like `Always`.
    First,
}

impl Default for PrependScheme {
    fn default() -> Self {
        PrependScheme::Always
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetaspaceConfig {
    #[serde(default = "default_replacement")]
    pub replacement: String,
    #[serde(default = "default_true")]
    pub add_prefix_space: bool,
    #[serde(default)]
    pub prepend_scheme: PrependScheme,
}

/// Rewrites spaces to a visible marker so that word boundaries survive
/// subword segmentation.
#[derive(Debug, Clone)]
pub struct MetaspacePreTokenizer {
    config: MetaspaceConfig,
}

impl MetaspacePreTokenizer {
    pub fn new(config: MetaspaceConfig) -> Self {
        MetaspacePreTokenizer { config }
    }
}

impl PreTokenizer for MetaspacePreTokenizer {
    fn pre_tokenize_text(&self, text: &str) -> Vec<String> {
        let mut normalized = text.replace(' ', &self.config.replacement);
        if self.config.add_prefix_space
            && !normalized.starts_with(&self.config.replacement)
            && self.config.prepend_scheme != PrependScheme::Never
        {
            normalized = format!("{}{}", self.config.replacement, normalized);
        }
        vec![normalized]
    }
}
