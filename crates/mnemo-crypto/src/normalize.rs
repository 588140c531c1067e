//! Unicode and whitespace canonicalization of mnemonic text.
//!
//! Some wordlists contain accented characters that can be typed either
//! precomposed or as a base letter plus combining mark. Everything that is
//! compared byte-for-byte or fed into a hash goes through NFKD first, on
//! the encode path and the decode path alike.

use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a mnemonic phrase.
///
/// Applies Unicode compatibility decomposition (NFKD), then splits on any
/// Unicode whitespace (including the ideographic space U+3000) and re-joins
/// the words with a single ASCII space. Leading and trailing whitespace is
/// dropped.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text.nfkd().collect();
    decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonicalizes a passphrase.
///
/// Only NFKD is applied. Spaces inside a passphrase are part of the secret
/// and are kept as typed.
pub fn normalize_passphrase(text: &str) -> String {
    text.nfkd().collect()
}

/// Canonicalizes a single word (NFKD, surrounding whitespace removed).
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkd().collect()
}
