//! Mnemonic language detection.
//!
//! A language is a candidate when its wordlist contains every word of the
//! phrase. Detection succeeds only with exactly one candidate; the
//! checksum is not consulted to break ties.

use mnemo_types::{Language, MnemoError, Result};

use crate::normalize::normalize;
use crate::wordlist::Wordlist;

/// Returns every language whose wordlist contains all words of `phrase`,
/// in [`Language::ALL`] order.
///
/// A phrase with no words has no candidates.
///
/// # Errors
///
/// [`MnemoError::InvalidWordlist`] if a bundled wordlist is corrupt.
pub fn candidate_languages(phrase: &str) -> Result<Vec<Language>> {
    let normalized = normalize(phrase);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for language in Language::ALL {
        let wordlist = Wordlist::load(language)?;
        let hits = words.iter().filter(|w| wordlist.contains(w)).count();
        if hits == words.len() {
            candidates.push(language);
        }
    }

    tracing::debug!(words = words.len(), candidates = ?candidates, "language candidates");
    Ok(candidates)
}

/// Determines the language of `phrase` from wordlist membership.
///
/// # Errors
///
/// - [`MnemoError::UnknownLanguage`] if no wordlist contains every word,
///   including when the phrase is empty.
/// - [`MnemoError::AmbiguousLanguage`] if more than one does, naming all
///   of them.
pub fn detect_language(phrase: &str) -> Result<Language> {
    let mut candidates = candidate_languages(phrase)?;
    match candidates.len() {
        0 => Err(MnemoError::UnknownLanguage {
            word_count: normalize(phrase).split_whitespace().count(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(MnemoError::AmbiguousLanguage { candidates }),
    }
}
