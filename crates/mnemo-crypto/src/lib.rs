//! BIP-39 mnemonic codec and seed derivation for the mnemo toolkit.
//!
//! This crate holds every algorithm of the toolkit. The CLI only parses
//! arguments and renders results.
//!
//! # Modules
//!
//! - [`wordlist`]: embedded 2048-word lists, cached per language
//! - [`normalize`]: NFKD and whitespace canonicalization
//! - [`hash`]: SHA-256 and checksum extraction
//! - [`codec`]: entropy <-> mnemonic bit packing
//! - [`validate`]: diagnostic and boolean validation
//! - [`detect`]: language detection by wordlist membership
//! - [`kdf`]: PBKDF2-HMAC-SHA512
//! - [`seed`]: mnemonic + passphrase -> 64-byte seed
//! - [`entropy`]: OS random entropy
//! - [`mnemonic`]: [`Mnemonic`] values and the [`Bip39`] API

pub mod codec;
pub mod detect;
pub mod entropy;
pub mod hash;
pub mod kdf;
pub mod mnemonic;
pub mod normalize;
pub mod seed;
pub mod validate;
pub mod wordlist;

pub use codec::Entropy;
pub use mnemonic::{Bip39, Mnemonic};
pub use seed::Seed;
pub use wordlist::Wordlist;
