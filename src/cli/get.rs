//! CryptGet - decrypt a file into a new acme window.

use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::GetCli;
use crate::core::acme;
use crate::core::cipher::Registry;
use crate::core::config::Config;
use crate::core::path;
use crate::error::{Error, Result};

/// Decrypt `cli.file` and show it in a window named without the suffix.
pub fn execute(cli: GetCli) -> Result<()> {
    let registry = Registry::default();
    let (name, plaintext) = decrypt(&cli.config, &registry, &cli.file)?;

    let fsys = acme::connect(&cli.config)?;
    let id = acme::create_window(fsys.as_ref(), &name, &plaintext)?;
    debug!(id, "CryptGet done");
    Ok(())
}

/// Decrypt `file`, returning the window name and the plaintext.
pub fn decrypt(
    config: &Config,
    registry: &Registry,
    file: &Path,
) -> Result<(PathBuf, Zeroizing<Vec<u8>>)> {
    let file = path::absolutize(file)?;
    let exists = file
        .try_exists()
        .map_err(|e| Error::io(format!("failed to stat {}", file.display()), e))?;
    if !exists {
        return Err(Error::NotFound(file));
    }

    let crypter = registry.resolve(config)?;
    let plaintext = crypter.decrypt(&file)?;

    Ok((path::strip_encrypted_suffix(&file), plaintext))
}
