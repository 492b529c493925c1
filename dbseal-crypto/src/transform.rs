//! One-shot cipher transforms.
//!
//! Each call drives a single encrypt or decrypt pass for one cipher
//! family: initialize the transform with key and IV, feed the whole input,
//! finalize. Block modes (CBC/ECB) pad with PKCS#7 into a buffer sized
//! `input + block_size` and truncate to the bytes actually produced;
//! stream modes (CTR/ChaCha20) apply the keystream with no padding. The
//! transform is an owned value consumed by the call.

use aes::{Aes128, Aes192, Aes256};
use chacha20::ChaCha20;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher, StreamCipherSeek};

use crate::error::{CipherError, CipherResult};
use crate::registry::Cipher;

pub(crate) fn encrypt(
    cipher: Cipher,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> CipherResult<Vec<u8>> {
    match cipher {
        Cipher::Aes128Cbc => {
            run_padded_encrypt(init_iv::<cbc::Encryptor<Aes128>>(key, iv)?, plaintext)
        }
        Cipher::Aes192Cbc => {
            run_padded_encrypt(init_iv::<cbc::Encryptor<Aes192>>(key, iv)?, plaintext)
        }
        Cipher::Aes256Cbc => {
            run_padded_encrypt(init_iv::<cbc::Encryptor<Aes256>>(key, iv)?, plaintext)
        }
        Cipher::Aes128Ecb => run_padded_encrypt(init_key::<ecb::Encryptor<Aes128>>(key)?, plaintext),
        Cipher::Aes192Ecb => run_padded_encrypt(init_key::<ecb::Encryptor<Aes192>>(key)?, plaintext),
        Cipher::Aes256Ecb => run_padded_encrypt(init_key::<ecb::Encryptor<Aes256>>(key)?, plaintext),
        Cipher::Aes128Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes128>>(key, iv)?, plaintext),
        Cipher::Aes192Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes192>>(key, iv)?, plaintext),
        Cipher::Aes256Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes256>>(key, iv)?, plaintext),
        Cipher::ChaCha20 => run_stream(init_chacha20(key, iv)?, plaintext),
    }
}

pub(crate) fn decrypt(
    cipher: Cipher,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> CipherResult<Vec<u8>> {
    match cipher {
        Cipher::Aes128Cbc => {
            run_padded_decrypt(init_iv::<cbc::Decryptor<Aes128>>(key, iv)?, ciphertext)
        }
        Cipher::Aes192Cbc => {
            run_padded_decrypt(init_iv::<cbc::Decryptor<Aes192>>(key, iv)?, ciphertext)
        }
        Cipher::Aes256Cbc => {
            run_padded_decrypt(init_iv::<cbc::Decryptor<Aes256>>(key, iv)?, ciphertext)
        }
        Cipher::Aes128Ecb => {
            run_padded_decrypt(init_key::<ecb::Decryptor<Aes128>>(key)?, ciphertext)
        }
        Cipher::Aes192Ecb => {
            run_padded_decrypt(init_key::<ecb::Decryptor<Aes192>>(key)?, ciphertext)
        }
        Cipher::Aes256Ecb => {
            run_padded_decrypt(init_key::<ecb::Decryptor<Aes256>>(key)?, ciphertext)
        }
        // Stream modes decrypt by applying the same keystream.
        Cipher::Aes128Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes128>>(key, iv)?, ciphertext),
        Cipher::Aes192Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes192>>(key, iv)?, ciphertext),
        Cipher::Aes256Ctr => run_stream(init_iv::<ctr::Ctr128BE<Aes256>>(key, iv)?, ciphertext),
        Cipher::ChaCha20 => run_stream(init_chacha20(key, iv)?, ciphertext),
    }
}

fn init_iv<T: KeyIvInit>(key: &[u8], iv: &[u8]) -> CipherResult<T> {
    T::new_from_slices(key, iv).map_err(|e| CipherError::InitFailed(e.to_string()))
}

fn init_key<T: KeyInit>(key: &[u8]) -> CipherResult<T> {
    T::new_from_slice(key).map_err(|e| CipherError::InitFailed(e.to_string()))
}

/// Builds a ChaCha20 transform from the 16-byte IV convention: a 4-byte
/// little-endian initial block counter followed by a 12-byte nonce.
/// The keystream does not wrap at the end of the 32-bit counter range:
/// data running past it fails the update step.
fn init_chacha20(key: &[u8], iv: &[u8]) -> CipherResult<ChaCha20> {
    let Some((counter_bytes, nonce)) = iv.split_first_chunk::<4>() else {
        return Err(CipherError::InitFailed(
            "chacha20 IV is missing its 4-byte counter prefix".to_string(),
        ));
    };
    let counter = u32::from_le_bytes(*counter_bytes);

    let mut transform: ChaCha20 = init_iv(key, nonce)?;
    transform
        .try_seek(u64::from(counter) * 64)
        .map_err(|e| CipherError::InitFailed(e.to_string()))?;
    Ok(transform)
}

fn run_padded_encrypt<E: BlockEncryptMut>(transform: E, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
    let mut out = vec![0u8; plaintext.len() + E::block_size()];
    let written = transform
        .encrypt_padded_b2b_mut::<Pkcs7>(plaintext, &mut out)
        .map_err(|_| CipherError::FinalizeFailed("padded output exceeded buffer".to_string()))?
        .len();
    out.truncate(written);
    Ok(out)
}

fn run_padded_decrypt<D: BlockDecryptMut>(transform: D, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
    if ciphertext.len() % D::block_size() != 0 {
        return Err(CipherError::FinalizeFailed(
            "wrong final block length".to_string(),
        ));
    }

    let mut out = vec![0u8; ciphertext.len()];
    let written = transform
        .decrypt_padded_b2b_mut::<Pkcs7>(ciphertext, &mut out)
        .map_err(|_| CipherError::FinalizeFailed("bad decrypt".to_string()))?
        .len();
    out.truncate(written);
    Ok(out)
}

fn run_stream<S: StreamCipher>(mut transform: S, data: &[u8]) -> CipherResult<Vec<u8>> {
    let mut out = vec![0u8; data.len()];
    transform
        .apply_keystream_b2b(data, &mut out)
        .map_err(|e| CipherError::UpdateFailed(e.to_string()))?;
    Ok(out)
}
