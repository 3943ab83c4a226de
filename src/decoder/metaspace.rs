//! Metaspace decoding.

use super::Decoder;
use serde::Deserialize;

fn default_replacement() -> String {
    "\u{2581}".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetaspaceDecoderConfig {
    #[serde(default = "default_replacement")]
    pub replacement: String,
    #[serde(default = "default_true")]
    pub add_prefix_space: bool,
}

/// Turns the metaspace marker back into spaces, dropping the artificial
/// leading space of the first token.
#[derive(Debug, Clone)]
pub struct MetaspaceDecoder {
    config: MetaspaceDecoderConfig,
}

impl MetaspaceDecoder {
    pub fn new(config: MetaspaceDecoderConfig) -> Self {
        MetaspaceDecoder { config }
    }
}

impl Decoder for MetaspaceDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let normalized = token.replace(&self.config.replacement, " ");
                if i == 0 && self.config.add_prefix_space {
                    if let Some(stripped) = normalized.strip_prefix(' ') {
                        return stripped.to_string();
                    }
                }
                normalized
            })
            .collect()
    }
}
