//! mnemo CLI.
//!
//! Generates, checks and converts BIP-39 mnemonics with the bundled
//! wordlists.

mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mnemo_types::config::MnemonicConfig;
use mnemo_types::Language;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// mnemo: BIP-39 mnemonic codec and seed derivation.
#[derive(Parser)]
#[command(name = "mnemo", version, about)]
struct Cli {
    /// Output in JSON format (no colors, machine-readable).
    #[arg(long, global = true)]
    json: bool,

    /// JSON configuration file (language, strength, auto_detect).
    #[arg(long, global = true, env = "MNEMO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new mnemonic and print it with its seed.
    Create {
        /// Wordlist language (defaults to the configured language).
        #[arg(short, long)]
        language: Option<Language>,
        /// Entropy strength in bits: 128, 160, 192, 224 or 256.
        #[arg(short, long)]
        strength: Option<usize>,
        /// Seed passphrase.
        #[arg(short, long, env = "MNEMO_PASSPHRASE", default_value = "", hide_env_values = true)]
        passphrase: String,
    },
    /// Validate a mnemonic (words and checksum).
    Check {
        /// Mnemonic words.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Wordlist language (detected when omitted).
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Decode a mnemonic to hex entropy.
    Entropy {
        /// Mnemonic words.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Wordlist language (detected when omitted).
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Encode hex entropy as a mnemonic.
    Encode {
        /// Entropy as hex (16, 20, 24, 28 or 32 bytes).
        entropy: String,
        /// Wordlist language (defaults to the configured language).
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Derive the hex seed of a phrase. Does not validate the phrase.
    Seed {
        /// Mnemonic words.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Seed passphrase.
        #[arg(short, long, env = "MNEMO_PASSPHRASE", default_value = "", hide_env_values = true)]
        passphrase: String,
    },
    /// Detect the wordlist language of a phrase.
    Detect {
        /// Mnemonic words.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Expand abbreviated words to full wordlist entries.
    Expand {
        /// Words or word prefixes.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Wordlist language (defaults to the configured language).
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// List supported languages.
    Languages,
}

// ---------------------------------------------------------------------------
// Global options passed to every command handler
// ---------------------------------------------------------------------------

/// Shared options threaded into command handlers.
pub struct GlobalOpts {
    pub json: bool,
    pub config: MnemonicConfig,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let result = load_config(cli.config.as_deref())
        .and_then(|config| dispatch(&GlobalOpts { json, config }, cli.command));

    if let Err(e) = result {
        output::print_error(&e, json);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> std::result::Result<MnemonicConfig, String> {
    let Some(path) = path else {
        return Ok(MnemonicConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    let config = MnemonicConfig::from_json(&text).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), language = %config.language, "config loaded");
    Ok(config)
}

fn dispatch(opts: &GlobalOpts, cmd: Commands) -> std::result::Result<(), String> {
    match cmd {
        Commands::Create {
            language,
            strength,
            passphrase,
        } => commands::mnemonic::create(opts, language, strength, &passphrase),
        Commands::Check { words, language } => {
            commands::mnemonic::check(opts, &words.join(" "), language)
        }
        Commands::Entropy { words, language } => {
            commands::mnemonic::entropy(opts, &words.join(" "), language)
        }
        Commands::Encode { entropy, language } => {
            commands::mnemonic::encode(opts, &entropy, language)
        }
        Commands::Seed { words, passphrase } => {
            commands::seed::seed(opts, &words.join(" "), &passphrase)
        }
        Commands::Detect { words } => commands::language::detect(opts, &words.join(" ")),
        Commands::Expand { words, language } => {
            commands::language::expand(opts, &words.join(" "), language)
        }
        Commands::Languages => commands::language::languages(opts),
    }
}
