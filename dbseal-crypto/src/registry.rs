//! Fixed registry of supported ciphers.
//!
//! Names follow the conventional `algorithm-keybits-mode` form
//! (`"aes-256-cbc"`) and are matched case-sensitively. Each entry carries
//! the metadata the codec needs: exact key length, IV length (zero for
//! modes that take no IV) and block size (1 for stream modes).

use std::fmt;

use crate::error::{CipherError, CipherResult};

/// A supported cipher/mode combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cipher {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Ecb,
    Aes192Ecb,
    Aes256Ecb,
    Aes128Ctr,
    Aes192Ctr,
    Aes256Ctr,
    /// IV is a 4-byte little-endian block counter plus a 12-byte nonce.
    /// The keystream is bounded by the 32-bit counter: data running past
    /// the end of its range fails the update step instead of wrapping.
    ChaCha20,
}

impl Cipher {
    /// Every cipher in the registry.
    pub const ALL: [Cipher; 10] = [
        Cipher::Aes128Cbc,
        Cipher::Aes192Cbc,
        Cipher::Aes256Cbc,
        Cipher::Aes128Ecb,
        Cipher::Aes192Ecb,
        Cipher::Aes256Ecb,
        Cipher::Aes128Ctr,
        Cipher::Aes192Ctr,
        Cipher::Aes256Ctr,
        Cipher::ChaCha20,
    ];

    /// Resolves a registry name to a cipher. Lookup is case-sensitive.
    pub fn from_name(name: &str) -> CipherResult<Cipher> {
        match name {
            "aes-128-cbc" => Ok(Cipher::Aes128Cbc),
            "aes-192-cbc" => Ok(Cipher::Aes192Cbc),
            "aes-256-cbc" => Ok(Cipher::Aes256Cbc),
            "aes-128-ecb" => Ok(Cipher::Aes128Ecb),
            "aes-192-ecb" => Ok(Cipher::Aes192Ecb),
            "aes-256-ecb" => Ok(Cipher::Aes256Ecb),
            "aes-128-ctr" => Ok(Cipher::Aes128Ctr),
            "aes-192-ctr" => Ok(Cipher::Aes192Ctr),
            "aes-256-ctr" => Ok(Cipher::Aes256Ctr),
            "chacha20" => Ok(Cipher::ChaCha20),
            _ => Err(CipherError::UnknownCipher(name.to_string())),
        }
    }

    /// The registry name this cipher resolves from.
    pub fn name(self) -> &'static str {
        match self {
            Cipher::Aes128Cbc => "aes-128-cbc",
            Cipher::Aes192Cbc => "aes-192-cbc",
            Cipher::Aes256Cbc => "aes-256-cbc",
            Cipher::Aes128Ecb => "aes-128-ecb",
            Cipher::Aes192Ecb => "aes-192-ecb",
            Cipher::Aes256Ecb => "aes-256-ecb",
            Cipher::Aes128Ctr => "aes-128-ctr",
            Cipher::Aes192Ctr => "aes-192-ctr",
            Cipher::Aes256Ctr => "aes-256-ctr",
            Cipher::ChaCha20 => "chacha20",
        }
    }

    /// Required key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            Cipher::Aes128Cbc | Cipher::Aes128Ecb | Cipher::Aes128Ctr => 16,
            Cipher::Aes192Cbc | Cipher::Aes192Ecb | Cipher::Aes192Ctr => 24,
            Cipher::Aes256Cbc | Cipher::Aes256Ecb | Cipher::Aes256Ctr => 32,
            Cipher::ChaCha20 => 32,
        }
    }

    /// Required IV length in bytes. Zero for modes that take no IV.
    pub fn iv_len(self) -> usize {
        match self {
            Cipher::Aes128Ecb | Cipher::Aes192Ecb | Cipher::Aes256Ecb => 0,
            _ => 16,
        }
    }

    /// Block size in bytes, used to bound padded output. Stream modes
    /// report 1: ciphertext length equals plaintext length.
    pub fn block_size(self) -> usize {
        match self {
            Cipher::Aes128Cbc | Cipher::Aes192Cbc | Cipher::Aes256Cbc => 16,
            Cipher::Aes128Ecb | Cipher::Aes192Ecb | Cipher::Aes256Ecb => 16,
            Cipher::Aes128Ctr | Cipher::Aes192Ctr | Cipher::Aes256Ctr => 1,
            Cipher::ChaCha20 => 1,
        }
    }

    /// Whether this cipher pads to block boundaries (CBC/ECB modes).
    pub fn is_padded(self) -> bool {
        self.block_size() > 1
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
