//! Error types.
//!
//! Every failure is terminal for the invocation: it is reported once on
//! stderr and the binary exits with status 1.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error for acme-crypt.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong or missing command-line arguments.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The input file does not exist.
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Window mode was requested outside of an acme window.
    #[error("not running in an acme window: {0}")]
    NotInEditor(String),

    /// Filesystem or window read/write failure.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl Error {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Missing or invalid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unsupported backend: {name} (supported: {supported})")]
    UnsupportedBackend { name: String, supported: String },

    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("{0} not found in PATH")]
    ProgramNotFound(String),

    #[error("cannot reach acme: no mounted acme file tree and no 9p client in PATH")]
    NoAcme,
}

/// Failures of the external encryption program.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} decrypt of {} failed ({status})\nstderr: {stderr}", .path.display())]
    Decrypt {
        program: String,
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} encrypt to {} failed ({status})\nstderr: {stderr}", .path.display())]
    Encrypt {
        program: String,
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
