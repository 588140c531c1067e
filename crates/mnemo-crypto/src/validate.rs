//! Mnemonic validation.
//!
//! [`validate`] reports exactly why a phrase is rejected. The boolean and
//! cross-language helpers are thin wrappers over it.

use mnemo_types::{Language, Result};

use crate::codec::decode;

/// Checks that `phrase` is a well-formed mnemonic in `language`.
///
/// # Errors
///
/// The first decode failure: [`mnemo_types::MnemoError::InvalidWordCount`],
/// [`mnemo_types::MnemoError::WordNotFound`] or
/// [`mnemo_types::MnemoError::ChecksumMismatch`].
pub fn validate(phrase: &str, language: Language) -> Result<()> {
    decode(phrase, language).map(drop)
}

/// Returns `true` if `phrase` is a well-formed mnemonic in `language`.
pub fn is_valid(phrase: &str, language: Language) -> bool {
    validate(phrase, language).is_ok()
}

/// Returns every language in which `phrase` validates, in
/// [`Language::ALL`] order.
pub fn valid_languages(phrase: &str) -> Vec<Language> {
    Language::ALL
        .into_iter()
        .filter(|&language| is_valid(phrase, language))
        .collect()
}

/// Returns the first language, in [`Language::ALL`] order, in which
/// `phrase` validates.
pub fn is_valid_any_language(phrase: &str) -> Option<Language> {
    Language::ALL
        .into_iter()
        .find(|&language| is_valid(phrase, language))
}
