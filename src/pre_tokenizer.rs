//! Pre-tokenization stages.
//!
//! A pre-tokenizer carves normalized text into pieces ahead of the model.
//! Its principal operation works on one text; [`PreTokenizer::pre_tokenize`]
//! lifts it over a piece list so that stages compose, each stage re-splitting
//! the pieces produced by the previous one.

pub mod bert;
pub mod byte_level;
pub mod metaspace;
pub mod punctuation;
pub mod sequence;
pub mod split;
pub mod whitespace;

pub use bert::BertPreTokenizer;
pub use byte_level::ByteLevelPreTokenizer;
pub use metaspace::MetaspacePreTokenizer;
pub use punctuation::{DigitsPreTokenizer, PunctuationPreTokenizer};
pub use sequence::PreTokenizerSequence;
pub use split::{ReplacePreTokenizer, SplitPreTokenizer};
pub use whitespace::{WhitespacePreTokenizer, WhitespaceSplit};

use crate::config::{config_tag, variant_config, ConfigError};
use serde_json::Value;

const FAMILY: &str = "PreTokenizer";

/// Character class used by the BERT-style splitters: Unicode punctuation
/// plus the ASCII symbol ranges BERT treats as punctuation.
pub(crate) const PUNCT_CLASS: &str = r"\p{P}\x21-\x2F\x3A-\x40\x5B-\x60\x7B-\x7E";

/// Base contract for pre-tokenization stages.
pub trait PreTokenizer: Send + Sync {
    /// Split one text into pieces.
    fn pre_tokenize_text(&self, text: &str) -> Vec<String>;

    /// Re-splits every piece of an intermediate result.
    fn pre_tokenize(&self, pieces: Vec<String>) -> Vec<String> {
        pieces
            .iter()
            .flat_map(|piece| self.pre_tokenize_text(piece))
            .collect()
    }

    /// Invocation alias for [`PreTokenizer::pre_tokenize`].
    fn call(&self, pieces: Vec<String>) -> Vec<String> {
        self.pre_tokenize(pieces)
    }
}

/// Builds a pre-tokenizer from its configuration node.
///
/// `Null` yields `None`; an unrecognized `type` tag fails at construction
/// time, naming both the tag and the family.
pub fn create_pre_tokenizer(config: &Value) -> Result<Option<Box<dyn PreTokenizer>>, ConfigError> {
    if config.is_null() {
        return Ok(None);
    }
    let tag = config_tag(FAMILY, config)?;
    let pre_tokenizer: Box<dyn PreTokenizer> = match tag {
        "BertPreTokenizer" => Box::new(BertPreTokenizer),
        "Sequence" => Box::new(PreTokenizerSequence::from_config(config)?),
        "Whitespace" => Box::new(WhitespacePreTokenizer),
        "WhitespaceSplit" => Box::new(WhitespaceSplit),
        "Metaspace" => Box::new(MetaspacePreTokenizer::new(variant_config(
            FAMILY, tag, config,
        )?)),
        "ByteLevel" => Box::new(ByteLevelPreTokenizer::new(variant_config(
            FAMILY, tag, config,
        )?)),
        "Split" => Box::new(SplitPreTokenizer::from_config(variant_config(
            FAMILY, tag, config,
        )?)?),
        "Punctuation" => Box::new(PunctuationPreTokenizer),
        "Digits" => Box::new(DigitsPreTokenizer::new(variant_config(FAMILY, tag, config)?)),
        "Replace" => Box::new(ReplacePreTokenizer::from_config(variant_config(
            FAMILY, tag, config,
        )?)?),
        _ => {
            return Err(ConfigError::UnknownTag {
                family: FAMILY,
                tag: tag.to_string(),
            })
        }
    };
    Ok(Some(pre_tokenizer))
}
