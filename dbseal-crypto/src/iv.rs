//! IV generation from the operating system's secure random source.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{CipherError, CipherResult};
use crate::registry::Cipher;

/// Generates a fresh random IV of the exact length `cipher` requires.
///
/// Ciphers that take no IV get an empty buffer back; that is a valid
/// "no IV needed" result, not an error. The fill is all-or-nothing: if the
/// random source cannot supply every byte the call fails with
/// [`CipherError::RandomSourceFailed`] and no partially filled IV is ever
/// returned.
pub fn generate_iv(cipher: Cipher) -> CipherResult<Vec<u8>> {
    let len = cipher.iv_len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let mut iv = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CipherError::RandomSourceFailed(e.to_string()))?;
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_iv_matches_cipher_length() {
        for cipher in Cipher::ALL {
            let iv = generate_iv(cipher).unwrap();
            assert_eq!(iv.len(), cipher.iv_len(), "cipher {}", cipher.name());
        }
    }

    #[test]
    fn iv_less_cipher_gets_empty_buffer() {
        assert!(generate_iv(Cipher::Aes256Ecb).unwrap().is_empty());
    }

    #[test]
    fn successive_ivs_differ() {
        let a = generate_iv(Cipher::Aes256Cbc).unwrap();
        let b = generate_iv(Cipher::Aes256Cbc).unwrap();
        assert_ne!(a, b, "two fresh 16-byte IVs should never collide");
    }
}
