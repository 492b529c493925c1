//! The cipher envelope codec.
//!
//! An envelope is the IV followed immediately by the ciphertext:
//!
//! ```text
//! [ IV: cipher.iv_len() bytes ][ ciphertext: block padded, variable ]
//! ```
//!
//! There is no length prefix, version tag or embedded cipher identifier;
//! the cipher name and key must be supplied out-of-band, identically on
//! both sides. Decryption takes the IV length from the resolved cipher,
//! never from the payload.

use crate::error::{CipherError, CipherResult};
use crate::iv::generate_iv;
use crate::registry::Cipher;
use crate::transform;

/// Encrypts `plaintext` with the named cipher, returning `IV || ciphertext`.
///
/// When `iv` is `None` a fresh random IV of the cipher's required length
/// is generated. A supplied IV must match that length exactly; the check
/// applies to caller-supplied IVs and generated ones alike, so a
/// wrong-length IV always reports [`CipherError::InvalidIvLength`] with
/// the expected and actual sizes. For ciphers that take no IV, pass `None`
/// or an explicitly empty slice.
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8],
    cipher_name: &str,
    iv: Option<&[u8]>,
) -> CipherResult<Vec<u8>> {
    let cipher = Cipher::from_name(cipher_name)?;
    check_key(cipher, key)?;

    let iv = match iv {
        Some(iv) => iv.to_vec(),
        None => generate_iv(cipher)?,
    };
    if iv.len() != cipher.iv_len() {
        return Err(CipherError::InvalidIvLength {
            cipher: cipher.name(),
            expected: cipher.iv_len(),
            actual: iv.len(),
        });
    }

    let ciphertext = transform::encrypt(cipher, key, &iv, plaintext)?;

    let mut envelope = iv;
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Decrypts an envelope produced by [`encrypt`] with the same cipher and key.
///
/// The envelope must be strictly longer than the cipher's IV length; an
/// IV with no ciphertext behind it is rejected as
/// [`CipherError::EnvelopeTooShort`]. A finalize failure is the routine
/// signal for a wrong key, wrong IV or corrupted ciphertext on padded
/// modes, with the primitive's reason in the message.
pub fn decrypt(envelope: &[u8], key: &[u8], cipher_name: &str) -> CipherResult<Vec<u8>> {
    let cipher = Cipher::from_name(cipher_name)?;
    check_key(cipher, key)?;

    if envelope.len() <= cipher.iv_len() {
        return Err(CipherError::EnvelopeTooShort {
            cipher: cipher.name(),
            iv_len: cipher.iv_len(),
            actual: envelope.len(),
        });
    }
    let (iv, ciphertext) = envelope.split_at(cipher.iv_len());

    transform::decrypt(cipher, key, iv, ciphertext)
}

fn check_key(cipher: Cipher, key: &[u8]) -> CipherResult<()> {
    if key.len() != cipher.key_len() {
        return Err(CipherError::InvalidKeyLength {
            cipher: cipher.name(),
            expected: cipher.key_len(),
            actual: key.len(),
        });
    }
    Ok(())
}
