//! Byte-level decoding.

use super::Decoder;
use crate::bytes::unicode_to_bytes;

/// Maps the printable stand-in alphabet back to bytes and reconstitutes the
/// text, lossily where the bytes are not valid UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct ByteLevelDecoder;

impl Decoder for ByteLevelDecoder {
    fn decode_chain(&self, tokens: Vec<String>) -> Vec<String> {
        if tokens.is_empty() {
            return Vec::new();
        }
        vec![unicode_to_bytes(&tokens.concat())]
    }
}
