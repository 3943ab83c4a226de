//! Configuration primitives shared by the stage factories.
//!
//! Stage configurations arrive as an untyped `serde_json::Value` tree. Each
//! node carries a `type` tag naming the variant; the factories dispatch on
//! the tag and deserialize the variant-specific fields into typed structs.
//! Everything fallible (tag lookup, field deserialization, pattern
//! compilation) happens here, at construction time, so the stages themselves
//! are infallible once built.

use regex::{NoExpand, Regex};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::ops::Range;

/// Errors raised while materializing a pipeline from configuration.
///
/// Any of these aborts pipeline assembly wholesale; no partially built
/// pipeline is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A configuration node has no `type` tag.
    MissingTag { family: &'static str },
    /// The `type` tag names no known variant of the family.
    UnknownTag { family: &'static str, tag: String },
    /// The tag is known but the variant fields failed to deserialize.
    InvalidConfig {
        family: &'static str,
        tag: String,
        message: String,
    },
    /// A configured regex pattern failed to compile.
    InvalidPattern { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingTag { family } => {
                write!(f, "{family} configuration is missing its `type` tag")
            }
            ConfigError::UnknownTag { family, tag } => {
                write!(f, "Unknown {family} type: {tag}")
            }
            ConfigError::InvalidConfig {
                family,
                tag,
                message,
            } => {
                write!(f, "Invalid {family} configuration for `{tag}`: {message}")
            }
            ConfigError::InvalidPattern { message } => {
                write!(f, "Invalid pattern: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A pattern as it appears in configuration: either a literal string or a
/// regex source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum PatternConfig {
    String(String),
    Regex(String),
}

/// A pattern compiled for matching. Compilation happens at stage
/// construction; a bad regex never survives factory dispatch.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    /// Compiles `pattern` into a matcher.
    pub fn compile(pattern: &PatternConfig) -> Result<Matcher, ConfigError> {
        match pattern {
            PatternConfig::String(literal) => Ok(Matcher::Literal(literal.clone())),
            PatternConfig::Regex(source) => Regex::new(source)
                .map(Matcher::Pattern)
                .map_err(|err| ConfigError::InvalidPattern {
                    message: err.to_string(),
                }),
        }
    }

    /// Replaces every match in `text` with `content`, taken literally.
    pub fn replace_all(&self, text: &str, content: &str) -> String {
        match self {
            Matcher::Literal(literal) if literal.is_empty() => text.to_string(),
            Matcher::Literal(literal) => text.replace(literal.as_str(), content),
            Matcher::Pattern(regex) => regex.replace_all(text, NoExpand(content)).into_owned(),
        }
    }

    /// Byte ranges of every match in `text`, in order.
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Matcher::Literal(literal) if literal.is_empty() => Vec::new(),
            Matcher::Literal(literal) => text
                .match_indices(literal.as_str())
                .map(|(start, matched)| start..start + matched.len())
                .collect(),
            Matcher::Pattern(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
        }
    }
}

/// What happens to the delimiter when a pattern splits a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SplitBehavior {
    Removed,
    Isolated,
    MergedWithPrevious,
    MergedWithNext,
    Contiguous,
}

/// Reads the `type` tag off a configuration node.
pub(crate) fn config_tag<'v>(
    family: &'static str,
    config: &'v Value,
) -> Result<&'v str, ConfigError> {
    config
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ConfigError::MissingTag { family })
}

/// Deserializes the variant-specific fields of a configuration node.
/// Unknown fields are tolerated, matching the permissiveness of the
/// serialized tokenizer configs in the wild.
pub(crate) fn variant_config<T: DeserializeOwned>(
    family: &'static str,
    tag: &str,
    config: &Value,
) -> Result<T, ConfigError> {
    serde_json::from_value(config.clone()).map_err(|err| ConfigError::InvalidConfig {
        family,
        tag: tag.to_string(),
        message: err.to_string(),
    })
}
