//! PBKDF2-HMAC-SHA512 key stretching.
//!
//! BIP-39 fixes the parameters (2048 rounds, 64-byte output); they are
//! still carried in [`Pbkdf2Params`] so the primitive can be checked
//! against published PBKDF2 vectors with other round counts. Invalid
//! parameters return [`MnemoError::ConfigError`].

use hmac::Hmac;
use mnemo_types::{MnemoError, Result};
use sha2::Sha512;

// ---------------------------------------------------------------------------
// Pbkdf2Params
// ---------------------------------------------------------------------------

/// Round count used by BIP-39 seed derivation.
pub const BIP39_ROUNDS: u32 = 2048;

/// Configurable parameters for PBKDF2-HMAC-SHA512.
///
/// # Defaults
///
/// | Parameter | Default | Meaning |
/// |-----------|---------|---------|
/// | `rounds`  | 2048    | HMAC iterations per output block |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pbkdf2Params {
    /// Number of iterations. Must be >= 1.
    pub rounds: u32,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            rounds: BIP39_ROUNDS,
        }
    }
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

/// Fills `out` with PBKDF2-HMAC-SHA512 output for `password` and `salt`.
///
/// # Errors
///
/// - [`MnemoError::ConfigError`] if `params.rounds` is zero or `out` is
///   empty.
/// - [`MnemoError::KeyDerivation`] if the underlying PBKDF2 computation
///   fails.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    params: &Pbkdf2Params,
    out: &mut [u8],
) -> Result<()> {
    if params.rounds == 0 {
        return Err(MnemoError::ConfigError {
            reason: "PBKDF2 rounds must be at least 1".into(),
        });
    }
    if out.is_empty() {
        return Err(MnemoError::ConfigError {
            reason: "PBKDF2 output buffer is empty".into(),
        });
    }

    pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, params.rounds, out).map_err(|e| {
        MnemoError::KeyDerivation {
            reason: format!("PBKDF2-HMAC-SHA512 failed: {e}"),
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
