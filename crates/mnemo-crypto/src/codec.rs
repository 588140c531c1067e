//! Entropy <-> mnemonic encoding with an embedded SHA-256 checksum.
//!
//! # Layout
//!
//! ```text
//! | entropy (ENT bits) | checksum (ENT / 32 bits) |
//! |  11  |  11  |  11  |  ...               |  11  |
//!  word 0 word 1 word 2                      word N-1
//! ```
//!
//! | ENT | CS | ENT + CS | words |
//! |-----|----|----------|-------|
//! | 128 | 4  | 132      | 12    |
//! | 160 | 5  | 165      | 15    |
//! | 192 | 6  | 198      | 18    |
//! | 224 | 7  | 231      | 21    |
//! | 256 | 8  | 264      | 24    |
//!
//! Bits are taken most-significant first, both when splitting entropy
//! bytes and when packing 11-bit word indices.

use mnemo_types::{
    is_valid_entropy_bits, is_valid_word_count, Language, MnemoError, Result, BITS_PER_WORD,
    WORDLIST_LEN,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::hash;
use crate::mnemonic::Mnemonic;
use crate::normalize::normalize;
use crate::wordlist::Wordlist;

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Raw BIP-39 entropy of 128, 160, 192, 224 or 256 bits.
///
/// Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Creates an [`Entropy`] from raw bytes, copying them.
    ///
    /// # Errors
    ///
    /// [`MnemoError::InvalidEntropyLength`] unless `bytes` is 16, 20, 24,
    /// 28 or 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bits = bytes.len() * 8;
        if !is_valid_entropy_bits(bits) {
            return Err(MnemoError::InvalidEntropyLength { bits });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Returns the raw entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: zero-length entropy is rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// BIP-39 checksum of this entropy, right-aligned.
    pub fn checksum(&self) -> u8 {
        hash::checksum(&self.0)
    }
}

// Entropy does not implement Clone/Debug to prevent leakage.

// ---------------------------------------------------------------------------
// Size helpers
// ---------------------------------------------------------------------------

/// Returns the mnemonic word count for an entropy strength in bits.
///
/// # Errors
///
/// [`MnemoError::InvalidEntropyLength`] for a strength BIP-39 does not
/// define.
pub fn word_count_for_bits(bits: usize) -> Result<usize> {
    if !is_valid_entropy_bits(bits) {
        return Err(MnemoError::InvalidEntropyLength { bits });
    }
    Ok((bits + hash::checksum_len(bits)) / BITS_PER_WORD)
}

/// Returns the entropy strength in bits carried by `count` words.
///
/// # Errors
///
/// [`MnemoError::InvalidWordCount`] for a word count BIP-39 does not
/// define.
pub fn bits_for_word_count(count: usize) -> Result<usize> {
    if !is_valid_word_count(count) {
        return Err(MnemoError::InvalidWordCount { count });
    }
    Ok(count * BITS_PER_WORD * 32 / 33)
}

/// Returns the checksum width in bits for `entropy`.
pub fn checksum_bits(entropy: &Entropy) -> usize {
    hash::checksum_len(entropy.bit_len())
}

// ---------------------------------------------------------------------------
// Bit packing
// ---------------------------------------------------------------------------

/// Splits `entropy || checksum` into 11-bit word indices.
///
/// The returned buffer is zeroized on drop.
pub fn encode_indices(entropy: &Entropy) -> Zeroizing<Vec<u16>> {
    let bytes = entropy.as_bytes();
    let cs_len = checksum_bits(entropy);
    let cs = entropy.checksum();

    let mut bits = Zeroizing::new(Vec::with_capacity(entropy.bit_len() + cs_len));
    for byte in bytes {
        for j in (0..8).rev() {
            bits.push((byte >> j) & 1);
        }
    }
    for j in (0..cs_len).rev() {
        bits.push((cs >> j) & 1);
    }

    let indices = bits
        .chunks(BITS_PER_WORD)
        .map(|group| group.iter().fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit)))
        .collect();
    Zeroizing::new(indices)
}

/// Reassembles entropy from 11-bit word indices and verifies the checksum.
///
/// # Errors
///
/// - [`MnemoError::InvalidWordCount`] if `indices.len()` is not 12, 15,
///   18, 21 or 24.
/// - [`MnemoError::IndexOutOfRange`] if an index is 2048 or larger.
/// - [`MnemoError::ChecksumMismatch`] if the trailing checksum bits do not
///   match SHA-256 of the recovered entropy.
pub fn decode_indices(indices: &[u16]) -> Result<Entropy> {
    let ent_bits = bits_for_word_count(indices.len())?;
    let total_bits = indices.len() * BITS_PER_WORD;

    let mut bits = Zeroizing::new(Vec::with_capacity(total_bits));
    for &index in indices {
        if usize::from(index) >= WORDLIST_LEN {
            return Err(MnemoError::IndexOutOfRange { index });
        }
        for j in (0..BITS_PER_WORD).rev() {
            bits.push(((index >> j) & 1) as u8);
        }
    }

    let mut bytes = vec![0u8; ent_bits / 8];
    for (i, &bit) in bits[..ent_bits].iter().enumerate() {
        bytes[i / 8] |= bit << (7 - (i % 8));
    }
    let entropy = Entropy(bytes);

    let found = bits[ent_bits..]
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | bit);
    let expected = entropy.checksum();

    if found != expected {
        return Err(MnemoError::ChecksumMismatch { expected, found });
    }

    Ok(entropy)
}

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

/// Encodes entropy as a mnemonic in `language`.
///
/// Words appear exactly as in the wordlist resource, joined with the
/// language's separator: the ideographic space U+3000 for Japanese, a
/// single ASCII space otherwise.
///
/// # Errors
///
/// [`MnemoError::InvalidWordlist`] if the language's wordlist resource is
/// corrupt.
pub fn encode(entropy: &Entropy, language: Language) -> Result<Mnemonic> {
    let wordlist = Wordlist::load(language)?;
    let indices = encode_indices(entropy);

    let mut words = Vec::with_capacity(indices.len());
    for &index in indices.iter() {
        let word = wordlist
            .word_at(index)
            .ok_or(MnemoError::IndexOutOfRange { index })?;
        words.push(word);
    }

    Ok(Mnemonic::from_parts(words.join(language.separator()), language))
}

/// Decodes a mnemonic phrase in `language` back to its entropy.
///
/// The phrase is normalized first, so extra whitespace and any Unicode
/// normalization form of accented words are accepted.
///
/// # Errors
///
/// - [`MnemoError::InvalidWordCount`] for a word count other than 12, 15,
///   18, 21 or 24.
/// - [`MnemoError::WordNotFound`] for the first word absent from the
///   wordlist.
/// - [`MnemoError::ChecksumMismatch`] if the checksum does not verify.
pub fn decode(phrase: &str, language: Language) -> Result<Entropy> {
    let wordlist = Wordlist::load(language)?;
    let normalized = Zeroizing::new(normalize(phrase));

    let words: Vec<&str> = normalized.split_whitespace().collect();
    if !is_valid_word_count(words.len()) {
        return Err(MnemoError::InvalidWordCount { count: words.len() });
    }

    let mut indices = Zeroizing::new(Vec::with_capacity(words.len()));
    for word in &words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| MnemoError::WordNotFound {
                word: (*word).to_string(),
                language,
            })?;
        indices.push(index);
    }

    decode_indices(&indices)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
