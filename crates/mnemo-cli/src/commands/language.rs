//! Language commands: detect, expand, languages.

use mnemo_crypto::Bip39;
use mnemo_types::{Language, MnemoError};

use crate::output;
use crate::GlobalOpts;

pub fn detect(opts: &GlobalOpts, phrase: &str) -> std::result::Result<(), String> {
    let language = Bip39::detect_language(phrase).map_err(|e| match e {
        MnemoError::AmbiguousLanguage { .. } => {
            format!("{e} (pass --language to choose)")
        }
        other => other.to_string(),
    })?;

    if opts.json {
        let obj = serde_json::json!({ "language": language });
        println!("{obj}");
    } else {
        output::print_kv("Language", language.tag());
    }

    Ok(())
}

pub fn expand(
    opts: &GlobalOpts,
    phrase: &str,
    language: Option<Language>,
) -> std::result::Result<(), String> {
    let language = language.unwrap_or(opts.config.language);
    let bip39 = Bip39::new(language).map_err(|e| e.to_string())?;
    let expanded = bip39.expand(phrase);

    if opts.json {
        let obj = serde_json::json!({ "language": language, "phrase": expanded });
        println!("{obj}");
    } else {
        output::print_kv("Phrase", &expanded);
    }

    Ok(())
}

pub fn languages(opts: &GlobalOpts) -> std::result::Result<(), String> {
    let rows: Vec<Vec<String>> = Bip39::languages()
        .iter()
        .map(|language| {
            let default = if *language == opts.config.language { "yes" } else { "" };
            vec![language.tag().to_string(), default.to_string()]
        })
        .collect();

    output::print_table(&["language", "default"], &rows, opts.json);
    Ok(())
}

