//! Mnemonic commands: create, check, entropy, encode.

use mnemo_crypto::Bip39;
use mnemo_types::Language;

use super::decode_language;
use crate::output;
use crate::GlobalOpts;

pub fn create(
    opts: &GlobalOpts,
    language: Option<Language>,
    strength: Option<usize>,
    passphrase: &str,
) -> std::result::Result<(), String> {
    let language = language.unwrap_or(opts.config.language);
    let strength = strength.unwrap_or(opts.config.strength);

    let bip39 = Bip39::new(language).map_err(|e| e.to_string())?;
    let mnemonic = bip39.generate(strength).map_err(|e| e.to_string())?;
    let seed = mnemonic.to_seed(passphrase).map_err(|e| e.to_string())?;
    let seed_hex = hex::encode(seed.as_bytes());

    if opts.json {
        let obj = serde_json::json!({
            "language": language,
            "strength": strength,
            "words": mnemonic.word_count(),
            "mnemonic": mnemonic.as_str(),
            "seed": seed_hex,
        });
        println!("{obj}");
    } else {
        output::print_success("mnemonic created");
        output::print_kv("Language", language.tag());
        output::print_kv("Strength", &format!("{strength} bits"));
        output::print_kv("Mnemonic", mnemonic.as_str());
        output::print_kv("Seed", &seed_hex);
    }

    Ok(())
}

pub fn check(
    opts: &GlobalOpts,
    phrase: &str,
    language: Option<Language>,
) -> std::result::Result<(), String> {
    let language = decode_language(opts, phrase, language)?;
    let bip39 = Bip39::new(language).map_err(|e| e.to_string())?;

    bip39
        .validate(phrase)
        .map_err(|e| format!("invalid mnemonic: {e}"))?;

    if opts.json {
        let obj = serde_json::json!({ "valid": true, "language": language });
        println!("{obj}");
    } else {
        output::print_success(&format!("valid {language} mnemonic"));
    }

    Ok(())
}

pub fn entropy(
    opts: &GlobalOpts,
    phrase: &str,
    language: Option<Language>,
) -> std::result::Result<(), String> {
    let language = decode_language(opts, phrase, language)?;
    let bip39 = Bip39::new(language).map_err(|e| e.to_string())?;
    let entropy = bip39.to_entropy(phrase).map_err(|e| e.to_string())?;
    let entropy_hex = hex::encode(entropy.as_bytes());

    if opts.json {
        let obj = serde_json::json!({
            "language": language,
            "bits": entropy.bit_len(),
            "entropy": entropy_hex,
        });
        println!("{obj}");
    } else {
        output::print_kv("Entropy", &entropy_hex);
    }

    Ok(())
}

pub fn encode(
    opts: &GlobalOpts,
    entropy_hex: &str,
    language: Option<Language>,
) -> std::result::Result<(), String> {
    let language = language.unwrap_or(opts.config.language);
    let bytes = hex::decode(entropy_hex.trim()).map_err(|e| format!("invalid entropy hex: {e}"))?;

    let bip39 = Bip39::new(language).map_err(|e| e.to_string())?;
    let mnemonic = bip39.to_mnemonic(&bytes).map_err(|e| e.to_string())?;

    if opts.json {
        let obj = serde_json::json!({
            "language": language,
            "mnemonic": mnemonic.as_str(),
        });
        println!("{obj}");
    } else {
        output::print_kv("Mnemonic", mnemonic.as_str());
    }

    Ok(())
}
