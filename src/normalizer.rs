//! Text normalization stages.
//!
//! A normalizer transforms text to text ahead of pre-tokenization. Stages
//! are built from tagged configuration nodes by [`create_normalizer`]; the
//! `Sequence` variant composes child normalizers in order.

pub mod basic;
pub mod bert;
pub mod precompiled;
pub mod replace;
pub mod sequence;
pub mod unicode;

pub use basic::{Lowercase, Prepend, StripAccents, StripNormalizer};
pub use bert::BertNormalizer;
pub use precompiled::Precompiled;
pub use replace::ReplaceNormalizer;
pub use sequence::NormalizerSequence;
pub use unicode::{UnicodeForm, UnicodeNormalizer};

use crate::config::{config_tag, variant_config, ConfigError};
use serde_json::Value;

const FAMILY: &str = "Normalizer";

/// Base contract for text normalization stages.
pub trait Normalizer: Send + Sync {
    /// Normalize the input text.
    fn normalize(&self, text: &str) -> String;

    /// Invocation alias for [`Normalizer::normalize`].
    fn call(&self, text: &str) -> String {
        self.normalize(text)
    }
}

/// Builds a normalizer from its configuration node.
///
/// `Null` means "no normalizer" and yields `None`. An unrecognized `type`
/// tag fails here, at construction time, naming both the tag and the
/// family.
pub fn create_normalizer(config: &Value) -> Result<Option<Box<dyn Normalizer>>, ConfigError> {
    if config.is_null() {
        return Ok(None);
    }
    let tag = config_tag(FAMILY, config)?;
    let normalizer: Box<dyn Normalizer> = match tag {
        "BertNormalizer" => Box::new(BertNormalizer::new(variant_config(FAMILY, tag, config)?)),
        "Precompiled" => Box::new(Precompiled),
        "Sequence" => Box::new(NormalizerSequence::from_config(config)?),
        "Replace" => Box::new(ReplaceNormalizer::from_config(variant_config(
            FAMILY, tag, config,
        )?)?),
        "NFC" => Box::new(UnicodeNormalizer::new(UnicodeForm::Nfc)),
        "NFD" => Box::new(UnicodeNormalizer::new(UnicodeForm::Nfd)),
        "NFKC" => Box::new(UnicodeNormalizer::new(UnicodeForm::Nfkc)),
        "NFKD" => Box::new(UnicodeNormalizer::new(UnicodeForm::Nfkd)),
        "Strip" => Box::new(StripNormalizer::new(variant_config(FAMILY, tag, config)?)),
        "StripAccents" => Box::new(StripAccents),
        "Lowercase" => Box::new(Lowercase),
        "Prepend" => Box::new(Prepend::new(variant_config(FAMILY, tag, config)?)),
        _ => {
            return Err(ConfigError::UnknownTag {
                family: FAMILY,
                tag: tag.to_string(),
            })
        }
    };
    Ok(Some(normalizer))
}
