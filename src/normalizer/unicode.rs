//! Unicode normalization forms.

use super::Normalizer;
use unicode_normalization::UnicodeNormalization;

/// The four standard Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// Applies one Unicode normalization form to the input.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeNormalizer {
    form: UnicodeForm,
}

impl UnicodeNormalizer {
    pub fn new(form: UnicodeForm) -> Self {
        UnicodeNormalizer { form }
    }
}

impl Normalizer for UnicodeNormalizer {
    fn normalize(&self, text: &str) -> String {
        match self.form {
            UnicodeForm::Nfc => text.nfc().collect(),
            UnicodeForm::Nfd => text.nfd().collect(),
            UnicodeForm::Nfkc => text.nfkc().collect(),
            UnicodeForm::Nfkd => text.nfkd().collect(),
        }
    }
}
