//! High-level pipeline assembly.
//!
//! A [`Pipeline`] materializes all four stage families from one
//! configuration tree in a single pass. Assembly is all-or-nothing: the
//! first configuration error aborts construction and no partially built
//! pipeline is ever returned.

use crate::config::ConfigError;
use crate::decoder::{create_decoder, Decoder};
use crate::normalizer::{create_normalizer, Normalizer};
use crate::post_processor::{create_post_processor, PostProcessedOutput, PostProcessor};
use crate::pre_tokenizer::{create_pre_tokenizer, PreTokenizer};
use serde_json::Value;
use std::fmt;

/// Errors that can occur while building a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The configuration source was not valid JSON.
    ParseError(String),
    /// A stage configuration failed to materialize.
    ConfigError(ConfigError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::ParseError(message) => write!(f, "Parse error: {message}"),
            PipelineError::ConfigError(err) => write!(f, "Configuration error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ConfigError> for PipelineError {
    fn from(err: ConfigError) -> Self {
        PipelineError::ConfigError(err)
    }
}

/// The four optional stages of a tokenizer pipeline, built once from a
/// configuration tree and immutable afterwards.
pub struct Pipeline {
    normalizer: Option<Box<dyn Normalizer>>,
    pre_tokenizer: Option<Box<dyn PreTokenizer>>,
    post_processor: Option<Box<dyn PostProcessor>>,
    decoder: Option<Box<dyn Decoder>>,
}

impl Pipeline {
    /// Builds a pipeline from the `normalizer`, `pre_tokenizer`,
    /// `post_processor` and `decoder` sections of `config`. Missing
    /// sections count as null, i.e. "no stage".
    pub fn from_value(config: &Value) -> Result<Self, ConfigError> {
        static NULL: Value = Value::Null;
        let section = |key: &str| config.get(key).unwrap_or(&NULL);
        Ok(Pipeline {
            normalizer: create_normalizer(section("normalizer"))?,
            pre_tokenizer: create_pre_tokenizer(section("pre_tokenizer"))?,
            post_processor: create_post_processor(section("post_processor"))?,
            decoder: create_decoder(section("decoder"))?,
        })
    }

    /// Parses `json` and builds the pipeline from it.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config: Value = serde_json::from_str(json)
            .map_err(|err| PipelineError::ParseError(err.to_string()))?;
        Ok(Pipeline::from_value(&config)?)
    }

    pub fn normalizer(&self) -> Option<&dyn Normalizer> {
        self.normalizer.as_deref()
    }

    pub fn pre_tokenizer(&self) -> Option<&dyn PreTokenizer> {
        self.pre_tokenizer.as_deref()
    }

    pub fn post_processor(&self) -> Option<&dyn PostProcessor> {
        self.post_processor.as_deref()
    }

    pub fn decoder(&self) -> Option<&dyn Decoder> {
        self.decoder.as_deref()
    }

    /// Applies the normalizer, or passes the text through.
    pub fn normalize(&self, text: &str) -> String {
        match &self.normalizer {
            Some(normalizer) => normalizer.normalize(text),
            None => text.to_string(),
        }
    }

    /// Normalizes and splits `text` into pieces.
    pub fn pre_tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        match &self.pre_tokenizer {
            Some(pre_tokenizer) => pre_tokenizer.pre_tokenize(vec![normalized]),
            None => vec![normalized],
        }
    }

    /// Applies the post-processor, or wraps the tokens unchanged.
    pub fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        match &self.post_processor {
            Some(post_processor) => {
                post_processor.post_process(tokens, tokens_pair, add_special_tokens)
            }
            None => PostProcessedOutput::tokens_only(tokens),
        }
    }

    /// Applies the decoder; without one, tokens concatenate as-is, which
    /// matches decoding through an identity chain.
    pub fn decode(&self, tokens: Vec<String>) -> String {
        match &self.decoder {
            Some(decoder) => decoder.decode(tokens),
            None => tokens.concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_config_builds_an_identity_pipeline() {
        let pipeline = Pipeline::from_value(&json!({})).unwrap();
        assert!(pipeline.normalizer().is_none());
        assert_eq!(pipeline.normalize("Text"), "Text");
        assert_eq!(pipeline.pre_tokenize("a b"), vec!["a b"]);
        assert_eq!(pipeline.decode(vec!["a".into(), "b".into()]), "ab");
    }

    #[test]
    fn one_bad_section_aborts_the_whole_assembly() {
        let err = Pipeline::from_value(&json!({
            "normalizer": {"type": "Lowercase"},
            "decoder": {"type": "Nope"},
        }))
        .err().unwrap();
        assert_eq!(err.to_string(), "Unknown Decoder type: Nope");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Pipeline::from_json("{not json").err().unwrap();
        assert!(matches!(err, PipelineError::ParseError(_)));
    }
}
