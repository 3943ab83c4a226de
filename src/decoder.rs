//! Decoding stages: model tokens back to text.
//!
//! Decoders work as chains: [`Decoder::decode_chain`] rewrites the token
//! list, and [`Decoder::decode`] joins the final chain into the surface
//! string. The `Sequence` variant threads the chain through its children,
//! which is why the chain form, not the joined string, is the composition
//! boundary.

pub mod basic;
pub mod byte_level;
pub mod ctc;
pub mod metaspace;
pub mod sequence;
pub mod wordpiece;

pub use basic::{ByteFallback, FuseDecoder, ReplaceDecoder, StripDecoder};
pub use byte_level::ByteLevelDecoder;
pub use ctc::CtcDecoder;
pub use metaspace::MetaspaceDecoder;
pub use sequence::DecoderSequence;
pub use wordpiece::{BpeDecoder, WordPieceDecoder};

use crate::config::{config_tag, variant_config, ConfigError};
use serde_json::Value;

const FAMILY: &str = "Decoder";

/// Base contract for decoding stages.
pub trait Decoder: Send + Sync {
    /// Rewrite the token chain one step toward surface text.
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String>;

    /// Decode tokens to text by joining the finished chain.
    fn decode(&self, tokens: Vec<String>) -> String {
        self.decode_chain(tokens).concat()
    }

    /// Invocation alias for [`Decoder::decode`].
    fn call(&self, tokens: Vec<String>) -> String {
        self.decode(tokens)
    }
}

/// Builds a decoder from its configuration node.
///
/// `Null` yields `None`; an unrecognized `type` tag fails at construction
/// time, naming both the tag and the family.
pub fn create_decoder(config: &Value) -> Result<Option<Box<dyn Decoder>>, ConfigError> {
    if config.is_null() {
        return Ok(None);
    }
    let tag = config_tag(FAMILY, config)?;
    let decoder: Box<dyn Decoder> = match tag {
        "ByteLevel" => Box::new(ByteLevelDecoder),
        "WordPiece" => Box::new(WordPieceDecoder::new(variant_config(FAMILY, tag, config)?)),
        "Metaspace" => Box::new(MetaspaceDecoder::new(variant_config(FAMILY, tag, config)?)),
        "BPEDecoder" => Box::new(BpeDecoder::new(variant_config(FAMILY, tag, config)?)),
        "CTC" => Box::new(CtcDecoder::new(variant_config(FAMILY, tag, config)?)),
        "Sequence" => Box::new(DecoderSequence::from_config(config)?),
        "Replace" => Box::new(ReplaceDecoder::from_config(variant_config(
            FAMILY, tag, config,
        )?)?),
        "Fuse" => Box::new(FuseDecoder),
        "Strip" => Box::new(StripDecoder::new(variant_config(FAMILY, tag, config)?)),
        "ByteFallback" => Box::new(ByteFallback),
        _ => {
            return Err(ConfigError::UnknownTag {
                family: FAMILY,
                tag: tag.to_string(),
            })
        }
    };
    Ok(Some(decoder))
}
