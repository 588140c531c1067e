//! BIP-39 seed derivation.
//!
//! - **Password**: the NFKD-normalized mnemonic sentence, words joined by
//!   single spaces.
//! - **Salt**: `"mnemonic"` followed by the NFKD-normalized passphrase.
//! - **Algorithm**: PBKDF2-HMAC-SHA512, 2048 rounds, 64-byte output.
//!
//! No checksum validation happens here: BIP-39 defines a seed for any
//! phrase. Callers that want to reject mistyped phrases validate first.

use mnemo_types::Result;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::kdf::{pbkdf2_hmac_sha512, Pbkdf2Params};
use crate::normalize::{normalize, normalize_passphrase};

/// Salt prefix fixed by BIP-39.
const SALT_PREFIX: &[u8] = b"mnemonic";

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// A 64-byte seed derived from a mnemonic and passphrase.
///
/// Automatically zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    /// Fixed byte length of a BIP-39 seed.
    pub const LEN: usize = 64;

    /// Creates a [`Seed`] from a raw 64-byte array.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 64-byte seed.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

// Seed does not implement Clone/Debug to prevent leakage.

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derives the 64-byte seed for `phrase` and `passphrase`.
///
/// Use `""` for no passphrase. The phrase is whitespace-collapsed and
/// decomposed; the passphrase is only decomposed, so its spaces count.
///
/// # Errors
///
/// [`mnemo_types::MnemoError::KeyDerivation`] if PBKDF2 fails.
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> Result<Seed> {
    let password = Zeroizing::new(normalize(phrase));
    let passphrase = Zeroizing::new(normalize_passphrase(passphrase));

    let mut salt = Zeroizing::new(Vec::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.extend_from_slice(SALT_PREFIX);
    salt.extend_from_slice(passphrase.as_bytes());

    let mut output = [0u8; Seed::LEN];
    let derived = pbkdf2_hmac_sha512(
        password.as_bytes(),
        &salt,
        &Pbkdf2Params::default(),
        &mut output,
    );
    if let Err(e) = derived {
        output.zeroize();
        return Err(e);
    }

    tracing::debug!(passphrase = !passphrase.is_empty(), "seed derived");
    Ok(Seed(output))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
