//! CryptPut - encrypt the current acme window, or stdin, to a .gpg file.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::cli::{output, PutCli};
use crate::core::acme;
use crate::core::cipher::Registry;
use crate::core::config::Config;
use crate::core::path;
use crate::error::{Error, Result};

/// Encrypt and save, then confirm the saved path on stderr.
pub fn execute(cli: PutCli) -> Result<()> {
    let registry = Registry::default();
    let saved = save(
        &cli.config,
        &registry,
        cli.path.as_deref(),
        &mut io::stdin().lock(),
    )?;
    output::success(&format!("Encrypted and saved to: {}", output::path(&saved)));
    Ok(())
}

/// Encrypt `stdin` to `path` + `.gpg`, or the current window to its name
/// + `.gpg` when no path is given. Returns the path written.
pub fn save(
    config: &Config,
    registry: &Registry,
    path: Option<&Path>,
    stdin: &mut dyn Read,
) -> Result<PathBuf> {
    let (content, output) = match path {
        Some(path) => {
            let mut content = Zeroizing::new(Vec::new());
            stdin
                .read_to_end(&mut content)
                .map_err(|e| Error::io("failed to read from stdin", e))?;
            (content, path::add_encrypted_suffix(path))
        }
        None => {
            let (content, name) = acme::read_current_window(config)?;
            (content, path::add_encrypted_suffix(&name))
        }
    };

    let crypter = registry.resolve(config)?;
    crypter.encrypt(&content, &output)?;
    Ok(output)
}
