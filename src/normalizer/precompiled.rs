//! SentencePiece-style precompiled normalization.
//!
//! Serialized tokenizer configs carry a binary `precompiled_charsmap`; the
//! runtime approximates it with a fixed scrub of control and space-like
//! characters followed by NFKC. U+FF5E is exempted from NFKC (the charsmap
//! keeps the fullwidth tilde as-is), so normalization runs segment-wise
//! around it.

use super::Normalizer;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static REMOVED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\u{0001}-\u{0008}\u{000B}\u{000E}-\u{001F}\u{007F}\u{008F}\u{009F}]",
    )
    .unwrap()
});

static SPACED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\u{0009}\u{000A}\u{000C}\u{000D}\u{1680}\u{200B}\u{200C}\u{200E}\u{200F}\u{2028}\u{2029}\u{2581}\u{FEFF}\u{FFFD}]",
    )
    .unwrap()
});

/// Approximation of a precompiled SentencePiece charsmap.
#[derive(Debug, Clone, Copy)]
pub struct Precompiled;

impl Normalizer for Precompiled {
    fn normalize(&self, text: &str) -> String {
        let text = REMOVED.replace_all(text, "");
        let text = SPACED.replace_all(&text, " ");
        if text.contains('\u{FF5E}') {
            text.split('\u{FF5E}')
                .map(|part| part.nfkc().collect::<String>())
                .collect::<Vec<_>>()
                .join("\u{FF5E}")
        } else {
            text.nfkc().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrubs_control_characters() {
        assert_eq!(Precompiled.normalize("a\u{0001}b\u{200B}c"), "ab c");
    }

    #[test]
    fn applies_nfkc() {
        assert_eq!(Precompiled.normalize("ﬁt ①"), "fit 1");
    }

    #[test]
    fn preserves_fullwidth_tilde_across_nfkc() {
        // NFKC would fold U+FF5E to a plain tilde; the charsmap keeps it.
        assert_eq!(Precompiled.normalize("a\u{FF5E}ﬁ"), "a\u{FF5E}fi");
    }
}
