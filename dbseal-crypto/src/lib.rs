//! Cipher envelope engine for dbseal.
//!
//! Encrypts and decrypts byte buffers with a cipher chosen by name from a
//! fixed registry, packaging IV and ciphertext into one self-contained
//! envelope (`IV || ciphertext`).
//!
//! # Architecture
//!
//! Three pieces, leaves first:
//!
//! 1. **Registry** ([`Cipher`]): resolves case-sensitive names like
//!    `"aes-256-cbc"` and exposes key/IV/block-size metadata.
//! 2. **IV generation** ([`generate_iv`]): draws an IV of the required
//!    length from the OS secure random source, used when the caller does
//!    not supply one.
//! 3. **Codec** ([`encrypt`] / [`decrypt`]): validates key and IV lengths,
//!    runs the one-shot transform, and assembles or splits the envelope.
//!
//! Every call is self-contained; no state persists between operations.
//!
//! ```
//! use dbseal_crypto::{decrypt, encrypt};
//!
//! let key = b"12345678901234567890123456789012";
//! let envelope = encrypt(b"payload", key, "aes-256-cbc", None)?;
//! let plaintext = decrypt(&envelope, key, "aes-256-cbc")?;
//! assert_eq!(plaintext, b"payload");
//! # Ok::<(), dbseal_crypto::CipherError>(())
//! ```

pub mod envelope;
mod error;
mod iv;
mod registry;
mod transform;

pub use envelope::{decrypt, encrypt};
pub use error::{CipherError, CipherResult};
pub use iv::generate_iv;
pub use registry::Cipher;
