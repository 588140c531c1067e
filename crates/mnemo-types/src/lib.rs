//! Core shared types for the mnemo BIP-39 toolkit.
//!
//! This crate defines the language tags, size constants, error type and
//! configuration shared by the codec crate and the command-line front end.
//! It carries no cryptography of its own.

pub mod config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Size constants
// ---------------------------------------------------------------------------

/// Entropy strengths, in bits, accepted by BIP-39.
pub const ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Mnemonic lengths, in words, accepted by BIP-39.
///
/// `WORD_COUNTS[i]` is the word count produced by `ENTROPY_BITS[i]`.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Number of entries in every BIP-39 wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// Bits carried by a single mnemonic word (`2^11 = 2048`).
pub const BITS_PER_WORD: usize = 11;

/// Returns `true` if `bits` is a valid BIP-39 entropy strength.
pub fn is_valid_entropy_bits(bits: usize) -> bool {
    ENTROPY_BITS.contains(&bits)
}

/// Returns `true` if `count` is a valid BIP-39 mnemonic length.
pub fn is_valid_word_count(count: usize) -> bool {
    WORD_COUNTS.contains(&count)
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A language with a bundled BIP-39 wordlist.
///
/// The set is closed: every variant maps to exactly one embedded wordlist
/// resource, and adding a language means adding a variant. The snake_case
/// tag (`"english"`, `"chinese_simplified"`, ...) is the textual and serde
/// form.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// BIP-39 English wordlist.
    #[default]
    English,
    /// BIP-39 Spanish wordlist.
    Spanish,
    /// BIP-39 French wordlist.
    French,
    /// BIP-39 Italian wordlist.
    Italian,
    /// BIP-39 Portuguese wordlist.
    Portuguese,
    /// BIP-39 Czech wordlist.
    Czech,
    /// BIP-39 Japanese wordlist. Phrases are joined with U+3000.
    Japanese,
    /// BIP-39 Korean wordlist.
    Korean,
    /// BIP-39 Chinese (simplified) wordlist.
    ChineseSimplified,
    /// BIP-39 Chinese (traditional) wordlist.
    ChineseTraditional,
}

impl Language {
    /// Every supported language, in detection and validation order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Portuguese,
        Language::Czech,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// Returns the snake_case language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Czech => "czech",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
        }
    }

    /// Returns the position of this language in [`Language::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Language::English => 0,
            Language::Spanish => 1,
            Language::French => 2,
            Language::Italian => 3,
            Language::Portuguese => 4,
            Language::Czech => 5,
            Language::Japanese => 6,
            Language::Korean => 7,
            Language::ChineseSimplified => 8,
            Language::ChineseTraditional => 9,
        }
    }

    /// Separator placed between words of a generated phrase.
    ///
    /// Japanese phrases use the ideographic space; every other language
    /// uses an ASCII space. Both normalize to a single ASCII space.
    pub fn separator(&self) -> &'static str {
        match self {
            Language::Japanese => "\u{3000}",
            _ => " ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = MnemoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.tag() == tag)
            .ok_or_else(|| MnemoError::UnsupportedLanguage { tag: s.to_string() })
    }
}

fn join_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(Language::tag)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// MnemoError
// ---------------------------------------------------------------------------

/// Central error type for the mnemo toolkit.
///
/// Every failure is caused by bad input or a broken environment, so none of
/// these errors is worth retrying. Variants carry enough context to render
/// a precise message.
#[derive(Debug, Error)]
pub enum MnemoError {
    /// The requested language has no bundled wordlist.
    #[error("unsupported language: {tag}")]
    UnsupportedLanguage {
        /// The tag that failed to parse.
        tag: String,
    },

    /// Entropy length is not one of 128, 160, 192, 224 or 256 bits.
    #[error("invalid entropy length: {bits} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength {
        /// Length of the rejected entropy, in bits.
        bits: usize,
    },

    /// Mnemonic word count is not one of 12, 15, 18, 21 or 24.
    #[error("invalid word count: {count} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount {
        /// Number of words found in the phrase.
        count: usize,
    },

    /// A word is absent from the selected language's wordlist.
    #[error("word '{word}' not found in the {language} wordlist")]
    WordNotFound {
        /// The offending word, as normalized.
        word: String,
        /// Wordlist that was searched.
        language: Language,
    },

    /// A word index does not fit in 11 bits.
    #[error("word index {index} out of range (expected 0..2048)")]
    IndexOutOfRange {
        /// The rejected index.
        index: u16,
    },

    /// The checksum embedded in the mnemonic does not match the entropy.
    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    ChecksumMismatch {
        /// Checksum recomputed from the decoded entropy.
        expected: u8,
        /// Checksum carried by the mnemonic.
        found: u8,
    },

    /// No supported wordlist contains every word of the phrase.
    #[error("unknown mnemonic language: no wordlist contains all {word_count} words")]
    UnknownLanguage {
        /// Number of words in the phrase.
        word_count: usize,
    },

    /// More than one wordlist contains every word of the phrase.
    #[error("ambiguous mnemonic language: candidates are {}", join_languages(.candidates))]
    AmbiguousLanguage {
        /// Every language whose wordlist contains all words.
        candidates: Vec<Language>,
    },

    /// The operating system's secure random generator failed.
    #[error("secure entropy source unavailable: {reason}")]
    EntropySource {
        /// Human-readable description of the failure.
        reason: String,
    },

    /// A wordlist resource is malformed (wrong size, duplicates, blanks).
    #[error("invalid {language} wordlist: {reason}")]
    InvalidWordlist {
        /// Language whose resource is malformed.
        language: Language,
        /// Human-readable description of the defect.
        reason: String,
    },

    /// The key derivation backend rejected its parameters.
    #[error("key derivation failed: {reason}")]
    KeyDerivation {
        /// Human-readable description of the failure.
        reason: String,
    },

    /// A configuration value is invalid or missing.
    #[error("config error: {reason}")]
    ConfigError {
        /// Human-readable description of the configuration problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Result alias
// ---------------------------------------------------------------------------

/// Convenience result type using [`MnemoError`].
pub type Result<T> = std::result::Result<T, MnemoError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
