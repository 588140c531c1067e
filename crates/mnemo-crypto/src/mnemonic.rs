//! Mnemonic values and the language-bound BIP-39 API.
//!
//! [`Bip39`] binds one wordlist and exposes the operations a wallet needs:
//!
//! 1. **Generation**: OS entropy -> checksummed mnemonic.
//! 2. **Conversion**: entropy <-> mnemonic in either direction.
//! 3. **Validation**: checksum and wordlist checks on a typed phrase.
//! 4. **Seed derivation**: PBKDF2-HMAC-SHA512 with an optional passphrase.
//!
//! Reference: <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>

use mnemo_types::config::MnemonicConfig;
use mnemo_types::{Language, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec::{self, Entropy};
use crate::detect;
use crate::entropy::random_entropy;
use crate::seed::{mnemonic_to_seed, Seed};
use crate::validate;
use crate::wordlist::Wordlist;

// ---------------------------------------------------------------------------
// Mnemonic
// ---------------------------------------------------------------------------

/// A checksummed mnemonic phrase and the language of its words.
///
/// Words are spelled exactly as in the wordlist and separated by
/// [`Language::separator`]. The phrase is zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    phrase: String,
    #[zeroize(skip)]
    language: Language,
}

impl Mnemonic {
    pub(crate) fn from_parts(phrase: String, language: Language) -> Self {
        Self { phrase, language }
    }

    /// Parses and validates `phrase` as a mnemonic in `language`.
    ///
    /// The stored phrase is the canonical spelling, so input with extra
    /// whitespace or decomposed accents comes back in wordlist form.
    ///
    /// # Errors
    ///
    /// Any decode failure (word count, unknown word, checksum).
    pub fn parse(phrase: &str, language: Language) -> Result<Self> {
        let entropy = codec::decode(phrase, language)?;
        codec::encode(&entropy, language)
    }

    /// Detects the language of `phrase`, then parses it.
    ///
    /// # Errors
    ///
    /// [`mnemo_types::MnemoError::UnknownLanguage`] or
    /// [`mnemo_types::MnemoError::AmbiguousLanguage`] if detection fails,
    /// otherwise any decode failure.
    pub fn parse_detect(phrase: &str) -> Result<Self> {
        let language = detect::detect_language(phrase)?;
        Self::parse(phrase, language)
    }

    /// Returns the mnemonic phrase as a string slice.
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Returns the individual words.
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(self.language.separator()).collect()
    }

    /// Returns the number of words.
    pub fn word_count(&self) -> usize {
        self.phrase.split(self.language.separator()).count()
    }

    /// Language of the words.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Recovers the entropy this mnemonic encodes.
    pub fn to_entropy(&self) -> Result<Entropy> {
        codec::decode(&self.phrase, self.language)
    }

    /// Derives the 64-byte seed with `passphrase` (`""` for none).
    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        mnemonic_to_seed(&self.phrase, passphrase)
    }
}

// Mnemonic does not implement Clone/Debug to prevent leakage.

// ---------------------------------------------------------------------------
// Bip39
// ---------------------------------------------------------------------------

/// BIP-39 operations bound to one language's wordlist.
#[derive(Clone, Copy, Debug)]
pub struct Bip39 {
    wordlist: &'static Wordlist,
    auto_detect: bool,
}

impl Bip39 {
    /// Binds `language`, loading its wordlist if it is not cached yet.
    ///
    /// # Errors
    ///
    /// [`mnemo_types::MnemoError::InvalidWordlist`] if the bundled resource
    /// is corrupt.
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self {
            wordlist: Wordlist::load(language)?,
            auto_detect: false,
        })
    }

    /// Binds the language named by `tag` (`"english"`, `"spanish"`, ...).
    ///
    /// # Errors
    ///
    /// [`mnemo_types::MnemoError::UnsupportedLanguage`] for an unknown tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::new(tag.parse()?)
    }

    /// Binds the configured language and detection policy.
    ///
    /// # Errors
    ///
    /// [`mnemo_types::MnemoError::ConfigError`] if `config` is invalid.
    pub fn from_config(config: &MnemonicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            auto_detect: config.auto_detect,
            ..Self::new(config.language)?
        })
    }

    /// Every language with a bundled wordlist.
    pub fn languages() -> &'static [Language] {
        &Language::ALL
    }

    /// Bound language.
    pub fn language(&self) -> Language {
        self.wordlist.language()
    }

    /// Bound wordlist.
    pub fn wordlist(&self) -> &'static Wordlist {
        self.wordlist
    }

    /// Generates a new mnemonic from `strength` bits of OS entropy.
    ///
    /// # Errors
    ///
    /// - [`mnemo_types::MnemoError::InvalidEntropyLength`] if `strength`
    ///   is not 128, 160, 192, 224 or 256.
    /// - [`mnemo_types::MnemoError::EntropySource`] if the OS generator
    ///   fails.
    pub fn generate(&self, strength: usize) -> Result<Mnemonic> {
        let entropy = random_entropy(strength)?;
        let mnemonic = codec::encode(&entropy, self.language())?;
        tracing::debug!(
            language = %self.language(),
            strength,
            words = mnemonic.word_count(),
            "mnemonic generated"
        );
        Ok(mnemonic)
    }

    /// Encodes raw entropy bytes as a mnemonic.
    ///
    /// # Errors
    ///
    /// [`mnemo_types::MnemoError::InvalidEntropyLength`] unless `entropy`
    /// is 16, 20, 24, 28 or 32 bytes.
    pub fn to_mnemonic(&self, entropy: &[u8]) -> Result<Mnemonic> {
        let entropy = Entropy::from_bytes(entropy)?;
        codec::encode(&entropy, self.language())
    }

    /// Decodes `phrase` back to entropy, verifying the checksum.
    pub fn to_entropy(&self, phrase: &str) -> Result<Entropy> {
        codec::decode(phrase, self.language())
    }

    /// Diagnostic validation of `phrase` in the bound language.
    pub fn validate(&self, phrase: &str) -> Result<()> {
        validate::validate(phrase, self.language())
    }

    /// Returns `true` if `phrase` is valid in the bound language.
    pub fn check(&self, phrase: &str) -> bool {
        validate::is_valid(phrase, self.language())
    }

    /// Language to decode `phrase` with: detected when this instance was
    /// configured with `auto_detect`, the bound language otherwise.
    pub fn language_for(&self, phrase: &str) -> Result<Language> {
        if self.auto_detect {
            detect::detect_language(phrase)
        } else {
            Ok(self.language())
        }
    }

    /// Derives the 64-byte seed. Independent of the bound language and
    /// performs no validation.
    pub fn to_seed(phrase: &str, passphrase: &str) -> Result<Seed> {
        mnemonic_to_seed(phrase, passphrase)
    }

    /// Detects the language of `phrase` from wordlist membership.
    pub fn detect_language(phrase: &str) -> Result<Language> {
        detect::detect_language(phrase)
    }

    /// Expands an abbreviated word against the bound wordlist.
    pub fn expand_word<'a>(&self, prefix: &'a str) -> &'a str {
        self.wordlist.expand_word(prefix)
    }

    /// Expands every abbreviated word of `phrase`.
    pub fn expand(&self, phrase: &str) -> String {
        self.wordlist.expand(phrase)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
