//! Subcommand handlers. Each returns a rendered error string on failure.

pub mod language;
pub mod mnemonic;
pub mod seed;

use mnemo_types::Language;

use crate::GlobalOpts;

/// Language for decoding `phrase`: the explicit flag if given, otherwise
/// the configured policy (detection or the configured language).
fn decode_language(
    opts: &GlobalOpts,
    phrase: &str,
    language: Option<Language>,
) -> std::result::Result<Language, String> {
    if let Some(language) = language {
        return Ok(language);
    }
    mnemo_crypto::Bip39::from_config(&opts.config)
        .and_then(|bip39| bip39.language_for(phrase))
        .map_err(|e| e.to_string())
}
