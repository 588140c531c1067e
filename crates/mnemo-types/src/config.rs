//! Toolkit configuration with sensible defaults.
//!
//! Every value has a documented default. Configuration can be built in code
//! or loaded from JSON; either way it must pass [`MnemonicConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::{is_valid_entropy_bits, Language, MnemoError, Result};

/// Settings for mnemonic generation and decoding.
///
/// Missing fields in a JSON document fall back to their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Wordlist used for generation, and for decoding when the phrase's
    /// language is not detected.
    pub language: Language,

    /// Entropy strength, in bits, of newly generated mnemonics.
    ///
    /// Must be one of 128, 160, 192, 224 or 256.
    pub strength: usize,

    /// Whether phrases of unknown origin are decoded against the detected
    /// language instead of [`MnemonicConfig::language`].
    pub auto_detect: bool,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            strength: 128,
            auto_detect: true,
        }
    }
}

impl MnemonicConfig {
    /// Validates all configuration values.
    ///
    /// Returns an error if any value is outside its acceptable range.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_entropy_bits(self.strength) {
            return Err(MnemoError::ConfigError {
                reason: format!(
                    "strength must be one of 128, 160, 192, 224 or 256, got {}",
                    self.strength
                ),
            });
        }

        Ok(())
    }

    /// Parses a configuration from a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| MnemoError::ConfigError {
            reason: format!("invalid config JSON: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }
}
