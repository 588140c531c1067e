//! BIP-39 wordlists: loading, caching and lookups.
//!
//! Each [`Language`] maps to a wordlist embedded at compile time from
//! `wordlists/<tag>.txt` (UTF-8, one word per line, 2048 lines, canonical
//! index order). A list is parsed and checked on first use, then cached
//! for the lifetime of the process.
//!
//! Lookups are keyed by the NFKD form of each word, so a word typed with a
//! precomposed accent and the same word with a combining mark resolve to
//! the same index.

use std::collections::HashMap;
use std::fmt;

use mnemo_types::{Language, MnemoError, Result, WORDLIST_LEN};
use once_cell::sync::OnceCell;

use crate::normalize::normalize_word;

// ---------------------------------------------------------------------------
// Resources and cache
// ---------------------------------------------------------------------------

fn resource(language: Language) -> &'static str {
    match language {
        Language::English => include_str!("../wordlists/english.txt"),
        Language::Spanish => include_str!("../wordlists/spanish.txt"),
        Language::French => include_str!("../wordlists/french.txt"),
        Language::Italian => include_str!("../wordlists/italian.txt"),
        Language::Portuguese => include_str!("../wordlists/portuguese.txt"),
        Language::Czech => include_str!("../wordlists/czech.txt"),
        Language::Japanese => include_str!("../wordlists/japanese.txt"),
        Language::Korean => include_str!("../wordlists/korean.txt"),
        Language::ChineseSimplified => include_str!("../wordlists/chinese_simplified.txt"),
        Language::ChineseTraditional => include_str!("../wordlists/chinese_traditional.txt"),
    }
}

#[allow(clippy::declare_interior_mutable_const)]
const UNLOADED: OnceCell<Wordlist> = OnceCell::new();

/// One slot per language, indexed by [`Language::index`].
static CACHE: [OnceCell<Wordlist>; Language::ALL.len()] = [UNLOADED; Language::ALL.len()];

// ---------------------------------------------------------------------------
// Wordlist
// ---------------------------------------------------------------------------

/// An ordered, immutable list of exactly 2048 unique words.
pub struct Wordlist {
    language: Language,
    /// Words as shipped in the resource, in index order.
    words: Vec<String>,
    /// NFKD form of each word, same order as `words`.
    normalized: Vec<String>,
    /// NFKD word -> index.
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Returns the cached wordlist for `language`, parsing it on first use.
    ///
    /// Concurrent first calls for the same language block on a single
    /// initializer; the resource is never parsed twice.
    ///
    /// # Errors
    ///
    /// [`MnemoError::InvalidWordlist`] if the embedded resource is malformed.
    pub fn load(language: Language) -> Result<&'static Wordlist> {
        CACHE[language.index()].get_or_try_init(|| {
            let list = Wordlist::parse(language, resource(language))?;
            tracing::debug!(language = %language, words = list.len(), "wordlist loaded");
            Ok(list)
        })
    }

    /// Parses a language tag and returns its cached wordlist.
    ///
    /// # Errors
    ///
    /// [`MnemoError::UnsupportedLanguage`] if no wordlist exists for `tag`.
    pub fn load_tag(tag: &str) -> Result<&'static Wordlist> {
        Self::load(tag.parse()?)
    }

    /// Builds a wordlist from text holding one word per line.
    ///
    /// Surrounding whitespace on each line, a leading byte-order mark and a
    /// trailing newline are tolerated. Anything else that breaks the
    /// 2048-entry bijection is rejected.
    ///
    /// # Errors
    ///
    /// [`MnemoError::InvalidWordlist`] on a blank entry, a duplicate word
    /// (compared in NFKD form) or a word count other than 2048.
    pub fn parse(language: Language, text: &str) -> Result<Wordlist> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut words = Vec::with_capacity(WORDLIST_LEN);
        let mut normalized = Vec::with_capacity(WORDLIST_LEN);
        let mut index = HashMap::with_capacity(WORDLIST_LEN);

        for (line_no, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                return Err(MnemoError::InvalidWordlist {
                    language,
                    reason: format!("blank entry at line {}", line_no + 1),
                });
            }
            if words.len() == WORDLIST_LEN {
                return Err(MnemoError::InvalidWordlist {
                    language,
                    reason: format!("more than {WORDLIST_LEN} words"),
                });
            }

            let key = normalize_word(word);
            // Bounded by the length check above, so the index fits in 11 bits.
            let position = words.len() as u16;
            if let Some(first) = index.insert(key.clone(), position) {
                return Err(MnemoError::InvalidWordlist {
                    language,
                    reason: format!(
                        "duplicate word '{word}' at lines {} and {}",
                        first + 1,
                        line_no + 1
                    ),
                });
            }

            words.push(word.to_string());
            normalized.push(key);
        }

        if words.len() != WORDLIST_LEN {
            return Err(MnemoError::InvalidWordlist {
                language,
                reason: format!("expected {WORDLIST_LEN} words, found {}", words.len()),
            });
        }

        Ok(Wordlist {
            language,
            words,
            normalized,
            index,
        })
    }

    /// Language this wordlist belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of words (always 2048 for a successfully parsed list).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a successfully parsed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the 11-bit index of `word`, if it is in the list.
    ///
    /// `word` may be in any Unicode normalization form.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        if let Some(&i) = self.index.get(word) {
            return Some(i);
        }
        self.index.get(normalize_word(word).as_str()).copied()
    }

    /// Returns the word at `index`, or `None` for an index past 2047.
    pub fn word_at(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Returns `true` if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Iterates over the words in index order, as shipped.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Expands an abbreviated word.
    ///
    /// Returns the word itself if it is in the list, the single word that
    /// starts with `prefix` if exactly one does, and `prefix` unchanged
    /// otherwise. This does not validate anything.
    pub fn expand_word<'a>(&'a self, prefix: &'a str) -> &'a str {
        let key = normalize_word(prefix);
        if let Some(&i) = self.index.get(&key) {
            return self.word_at(i).unwrap_or(prefix);
        }

        let mut matches = self
            .normalized
            .iter()
            .enumerate()
            .filter(|(_, word)| word.starts_with(key.as_str()));

        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => self.words.get(i).map(String::as_str).unwrap_or(prefix),
            _ => prefix,
        }
    }

    /// Expands every word of `phrase` with [`Wordlist::expand_word`] and
    /// joins the result with the language's word separator.
    pub fn expand(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .map(|word| self.expand_word(word))
            .collect::<Vec<_>>()
            .join(self.language.separator())
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
