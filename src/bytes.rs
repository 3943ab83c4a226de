//! Shared byte-level alphabet and detokenization cleanup.
//!
//! Byte-level stages operate on a reversible remapping of raw bytes onto
//! printable code points: bytes that are already printable map to
//! themselves, the rest are shifted into the `U+0100..` range. The tables
//! are built once and shared by the ByteLevel pre-tokenizer and decoder.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Forward table: byte value to its printable stand-in code point.
pub static BYTE_ENCODER: Lazy<[char; 256]> = Lazy::new(|| {
    let mut table = ['\0'; 256];
    let mut shifted = 0u32;
    for byte in 0u32..256 {
        let printable = (0x21..=0x7E).contains(&byte)
            || (0xA1..=0xAC).contains(&byte)
            || (0xAE..=0xFF).contains(&byte);
        let code_point = if printable {
            byte
        } else {
            let code_point = 256 + shifted;
            shifted += 1;
            code_point
        };
        table[byte as usize] = char::from_u32(code_point).unwrap();
    }
    table
});

/// Reverse table: stand-in code point back to the byte it encodes.
pub static BYTE_DECODER: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    BYTE_ENCODER
        .iter()
        .enumerate()
        .map(|(byte, &ch)| (ch, byte as u8))
        .collect()
});

/// Remaps every byte of `text` through [`BYTE_ENCODER`].
pub fn bytes_to_unicode(text: &str) -> String {
    text.bytes().map(|byte| BYTE_ENCODER[byte as usize]).collect()
}

/// Maps the stand-in code points of `text` back to bytes and reconstitutes
/// the string, lossily where the bytes do not form valid UTF-8. Code points
/// outside the alphabet are dropped.
pub fn unicode_to_bytes(text: &str) -> String {
    let bytes: Vec<u8> = text
        .chars()
        .filter_map(|ch| BYTE_DECODER.get(&ch).copied())
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Cleans up common detokenization artifacts: spaces before punctuation and
/// split English contractions.
pub fn clean_up_tokenization(text: &str) -> String {
    text.replace(" .", ".")
        .replace(" ?", "?")
        .replace(" !", "!")
        .replace(" ,", ",")
        .replace(" ' ", "' ")
        .replace(" n't", "n't")
        .replace(" 'm", "'m")
        .replace(" 's", "'s")
        .replace(" 've", "'ve")
        .replace(" 're", "'re")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoder_is_a_bijection() {
        assert_eq!(BYTE_DECODER.len(), 256);
        for byte in 0..=255u8 {
            let ch = BYTE_ENCODER[byte as usize];
            assert_eq!(BYTE_DECODER[&ch], byte);
        }
    }

    #[test]
    fn printable_bytes_map_to_themselves() {
        assert_eq!(BYTE_ENCODER[b'a' as usize], 'a');
        assert_eq!(BYTE_ENCODER[b'!' as usize], '!');
    }

    #[test]
    fn space_is_shifted_out_of_the_printable_range() {
        assert_eq!(BYTE_ENCODER[b' ' as usize], '\u{0120}');
    }

    #[test]
    fn round_trips_multibyte_text() {
        let text = "héllo wörld 日本語";
        assert_eq!(unicode_to_bytes(&bytes_to_unicode(text)), text);
    }

    #[test]
    fn cleanup_rejoins_contractions_and_punctuation() {
        assert_eq!(
            clean_up_tokenization("he 's here , is n't he ?"),
            "he's here, isn't he?"
        );
    }
}
