//! Secure random entropy from the operating system.
//!
//! Bytes come straight from [`OsRng`]; there is no user-space generator to
//! seed and no fallback to a weaker source.

use mnemo_types::{is_valid_entropy_bits, MnemoError, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::codec::Entropy;

/// Returns `n` bytes from the OS CSPRNG, zeroized on drop.
///
/// # Errors
///
/// [`MnemoError::EntropySource`] if the operating system generator fails.
pub fn random_bytes(n: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(vec![0u8; n]);
    OsRng
        .try_fill_bytes(buf.as_mut_slice())
        .map_err(|e| MnemoError::EntropySource {
            reason: format!("OS random generator failed: {e}"),
        })?;
    Ok(buf)
}

/// Draws fresh entropy of `bits` bits.
///
/// # Errors
///
/// - [`MnemoError::InvalidEntropyLength`] if `bits` is not 128, 160, 192,
///   224 or 256. Checked before any randomness is drawn.
/// - [`MnemoError::EntropySource`] if the operating system generator fails.
pub fn random_entropy(bits: usize) -> Result<Entropy> {
    if !is_valid_entropy_bits(bits) {
        return Err(MnemoError::InvalidEntropyLength { bits });
    }
    let bytes = random_bytes(bits / 8)?;
    Entropy::from_bytes(&bytes)
}
