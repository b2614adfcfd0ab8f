//! Command-line interface.
//!
//! Argument parsers for the two binaries plus the shared startup and
//! error reporting they both use.

pub mod get;
pub mod output;
pub mod put;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::config::Config;
use crate::core::constants::{LOG_VAR, RECIPIENT_VAR};
use crate::error::{ConfigError, Error};

/// Decrypt a file into a new acme window.
#[derive(Parser, Debug)]
#[command(
    name = "CryptGet",
    version,
    about = "Decrypt a file into a new acme window",
    after_help = "Save edits with the CryptPut command in the window's tag."
)]
pub struct GetCli {
    /// Encrypted file (.gpg, .asc or .pgp)
    pub file: PathBuf,

    #[command(flatten)]
    pub config: Config,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Encrypt the current acme window, or stdin, to a .gpg file.
#[derive(Parser, Debug)]
#[command(
    name = "CryptPut",
    version,
    about = "Encrypt the current acme window (or stdin) to a .gpg file"
)]
pub struct PutCli {
    /// Save stdin to this path (.gpg is appended). Without it, the current
    /// acme window is saved.
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments, exiting 1 on a usage error and 0 for help/version.
pub fn parse<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => fail(Error::Usage(e)),
    }
}

/// Install the tracing subscriber.
///
/// `ACME_CRYPT_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("acme_crypt=debug")
        } else {
            EnvFilter::new("acme_crypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Report `err` on stderr and exit with status 1.
pub fn fail(err: Error) -> ! {
    match &err {
        // clap renders its own usage message
        Error::Usage(e) => eprint!("{}", e),
        _ => {
            output::error(&err.to_string());
            if let Some(hint) = hint(&err) {
                output::hint(hint);
            }
        }
    }
    std::process::exit(1);
}

fn hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Config(ConfigError::MissingVar(var)) if *var == RECIPIENT_VAR => {
            Some("export ACME_CRYPT_RCPT=<key id or email>")
        }
        Error::Config(ConfigError::ProgramNotFound(_)) => {
            Some("install GnuPG or point ACME_CRYPT_GPG at it")
        }
        Error::Config(ConfigError::NoAcme) => {
            Some("start acme, or set ACME_CRYPT_MNT to its mounted file tree")
        }
        Error::NotInEditor(_) => {
            Some("run CryptPut from an acme window tag, or pass an output path")
        }
        _ => None,
    }
}
