//! Seed derivation command.

use mnemo_crypto::Bip39;

use crate::output;
use crate::GlobalOpts;

pub fn seed(opts: &GlobalOpts, phrase: &str, passphrase: &str) -> std::result::Result<(), String> {
    let seed = Bip39::to_seed(phrase, passphrase).map_err(|e| e.to_string())?;
    let seed_hex = hex::encode(seed.as_bytes());

    if opts.json {
        let obj = serde_json::json!({ "seed": seed_hex });
        println!("{obj}");
    } else {
        output::print_kv("Seed", &seed_hex);
    }

    Ok(())
}
