//! Runtime configuration.
//!
//! Both binaries flatten [`Config`] into their argument parser, so every
//! setting can come from a flag or from the environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Args;

use crate::core::constants::{
    BACKEND_VAR, DEFAULT_BACKEND, DEFAULT_GPG, DISPLAY_VAR, GPG_VAR, MOUNT_VAR, RECIPIENT_VAR,
};

/// Settings shared by CryptGet and CryptPut.
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Encryption backend
    #[arg(long, env = BACKEND_VAR, default_value = DEFAULT_BACKEND)]
    pub backend: String,

    /// Recipient key id or email used for encryption
    #[arg(long, env = RECIPIENT_VAR)]
    pub recipient: Option<String>,

    /// gpg executable
    #[arg(long = "gpg", env = GPG_VAR, default_value = DEFAULT_GPG)]
    pub gpg_program: PathBuf,

    /// Directory where acme's file tree is mounted
    #[arg(long, env = MOUNT_VAR)]
    pub acme_mount: Option<PathBuf>,

    /// Display server forwarded to child processes
    #[arg(skip = std::env::var_os(DISPLAY_VAR))]
    pub display: Option<OsString>,
}

impl Config {
    /// Backend name, falling back to the default when blank.
    pub fn backend_name(&self) -> &str {
        let name = self.backend.trim();
        if name.is_empty() {
            DEFAULT_BACKEND
        } else {
            name
        }
    }

    /// Recipient, ignoring a blank value.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            recipient: None,
            gpg_program: PathBuf::from(DEFAULT_GPG),
            acme_mount: None,
            display: None,
        }
    }
}
