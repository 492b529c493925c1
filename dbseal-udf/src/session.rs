//! Per-session UDF state and operation wrappers.

use dbseal_crypto::{decrypt, encrypt};
use tracing::debug;

/// State for one database session (one worker or connection).
///
/// Each session owns its last-error slot, so concurrent sessions never see
/// each other's failures. The slot is cleared at the start of every
/// operation and set when the operation fails; [`last_error`] reads it
/// without clearing.
///
/// [`last_error`]: UdfSession::last_error
#[derive(Debug, Default)]
pub struct UdfSession {
    last_error: Option<String>,
}

impl UdfSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encrypts `plaintext` with the named cipher, returning the envelope
    /// or `None` on failure (message retrievable via [`last_error`]).
    ///
    /// [`last_error`]: UdfSession::last_error
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        key: &[u8],
        cipher_name: &str,
        iv: Option<&[u8]>,
    ) -> Option<Vec<u8>> {
        self.last_error = None;
        match encrypt(plaintext, key, cipher_name, iv) {
            Ok(envelope) => {
                debug!(
                    cipher = cipher_name,
                    plaintext_len = plaintext.len(),
                    envelope_len = envelope.len(),
                    "encrypt ok"
                );
                Some(envelope)
            }
            Err(e) => {
                debug!(cipher = cipher_name, error = %e, "encrypt failed");
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Decrypts an envelope with the named cipher, returning the plaintext
    /// or `None` on failure (message retrievable via [`last_error`]).
    ///
    /// [`last_error`]: UdfSession::last_error
    pub fn decrypt(&mut self, envelope: &[u8], key: &[u8], cipher_name: &str) -> Option<Vec<u8>> {
        self.last_error = None;
        match decrypt(envelope, key, cipher_name) {
            Ok(plaintext) => {
                debug!(
                    cipher = cipher_name,
                    envelope_len = envelope.len(),
                    plaintext_len = plaintext.len(),
                    "decrypt ok"
                );
                Some(plaintext)
            }
            Err(e) => {
                debug!(cipher = cipher_name, error = %e, "decrypt failed");
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Returns the message from the most recent failed operation, or `None`
    /// when the most recent operation succeeded (or none has run yet).
    ///
    /// Reading does not clear the slot; the next operation does.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
