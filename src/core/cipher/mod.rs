//! Encryption backends.
//!
//! A backend turns an encrypted file into plaintext and plaintext back
//! into an encrypted file. Backends are looked up by name in a
//! [`Registry`]; `gpg` is registered by default.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Crypter` trait
//! 2. Add the implementation in a new file (e.g., `age.rs`)
//! 3. Register a constructor in `Registry::default` or at startup with
//!    `Registry::register`

use std::path::Path;

use zeroize::Zeroizing;

use crate::error::Result;

mod gpg;
mod registry;

pub use gpg::Gpg;
pub use registry::{Constructor, Registry};

/// Encrypt/decrypt capability handed out by a backend constructor.
///
/// A crypter is built per invocation from [`Config`](crate::core::config::Config),
/// used once and dropped.
pub trait Crypter {
    /// Decrypt the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Decrypt` with the tool's stderr if it fails.
    fn decrypt(&self, path: &Path) -> Result<Zeroizing<Vec<u8>>>;

    /// Encrypt `data` into `output`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Encrypt` with the tool's stderr if it fails.
    fn encrypt(&self, data: &[u8], output: &Path) -> Result<()>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}
