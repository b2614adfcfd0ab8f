//! GPG cipher backend.
//!
//! Shells out to the gpg CLI. Decryption uses whatever secret key the
//! keyring holds; encryption targets the configured recipient and writes
//! ASCII armor.
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed (or `ACME_CRYPT_GPG` must point at it)
//! - `ACME_CRYPT_RCPT` must name a public key in the keyring
//! - `DISPLAY` is forwarded so a graphical pinentry can ask for the
//!   passphrase

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Crypter;
use crate::core::config::Config;
use crate::core::constants::{DISPLAY_VAR, RECIPIENT_VAR};
use crate::error::{BackendError, ConfigError, Error, Result};

/// GPG cipher backend using gpg CLI
#[derive(Debug, Clone)]
pub struct Gpg {
    program: PathBuf,
    recipient: String,
    display: Option<OsString>,
}

impl Gpg {
    /// Build from configuration.
    ///
    /// # Errors
    ///
    /// Fails if no recipient is configured or the gpg program cannot be
    /// found.
    pub fn from_config(config: &Config) -> Result<Self> {
        let recipient = config
            .recipient()
            .ok_or(ConfigError::MissingVar(RECIPIENT_VAR))?;

        let program = which::which(&config.gpg_program).map_err(|_| {
            ConfigError::ProgramNotFound(config.gpg_program.display().to_string())
        })?;

        Ok(Self::new(program, recipient, config.display.clone()))
    }

    pub fn new(
        program: impl Into<PathBuf>,
        recipient: impl Into<String>,
        display: Option<OsString>,
    ) -> Self {
        Self {
            program: program.into(),
            recipient: recipient.into(),
            display,
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Base command. Inherits the environment but always sets DISPLAY,
    /// empty when unset.
    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.env(DISPLAY_VAR, self.display.as_deref().unwrap_or(OsStr::new("")));
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        BackendError::Spawn {
            program: self.program_name(),
            source,
        }
        .into()
    }
}

impl Crypter for Gpg {
    fn name(&self) -> &'static str {
        "gpg"
    }

    fn decrypt(&self, path: &Path) -> Result<Zeroizing<Vec<u8>>> {
        debug!(path = %path.display(), "decrypting with gpg");

        let output = self
            .command()
            .args(["--decrypt", "--quiet", "--batch", "--no-tty"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let plaintext = Zeroizing::new(output.stdout);
        if !output.status.success() {
            return Err(BackendError::Decrypt {
                program: self.program_name(),
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        trace!(plaintext_len = plaintext.len(), "decrypted with gpg");
        Ok(plaintext)
    }

    fn encrypt(&self, data: &[u8], output: &Path) -> Result<()> {
        debug!(
            path = %output.display(),
            plaintext_len = data.len(),
            "encrypting with gpg"
        );

        // Not atomic: the old file is gone before gpg writes the new one.
        if output.exists() {
            fs::remove_file(output).map_err(|e| {
                Error::io(
                    format!("failed to remove existing file {}", output.display()),
                    e,
                )
            })?;
        }

        let mut child = self
            .command()
            .args([
                "--encrypt",
                "--armor",
                "--recipient",
                self.recipient.as_str(),
                "--batch",
                "--no-tty",
                "--output",
            ])
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Close stdin before waiting so gpg sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(data),
            None => Ok(()),
        };

        let result = child
            .wait_with_output()
            .map_err(|e| self.spawn_error(e))?;

        if !result.status.success() {
            return Err(BackendError::Encrypt {
                program: self.program_name(),
                path: output.to_path_buf(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            }
            .into());
        }
        written.map_err(|e| Error::io("failed to write plaintext to gpg", e))?;

        trace!(path = %output.display(), "encrypted with gpg");
        Ok(())
    }
}
