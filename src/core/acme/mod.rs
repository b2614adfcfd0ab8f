//! acme window adapter.
//!
//! Opens decrypted content in a new window and reads the content of the
//! window a command was run from.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::constants::{DEFAULT_ACME_MOUNT, NINEP_PROGRAM, TAG_MARKER, WINID_VAR};
use crate::core::path;
use crate::error::{ConfigError, Error, Result};

mod fsys;
mod window;

pub use fsys::{Fsys, Mount, NineP, WinFile};
pub use window::Window;

/// Pick a way to reach acme: an explicit mount, the default mount, or the
/// `9p` client.
pub fn connect(config: &Config) -> Result<Box<dyn Fsys>> {
    connect_in(config, Path::new(DEFAULT_ACME_MOUNT), env::var_os("PATH"))
}

fn connect_in(
    config: &Config,
    default: &Path,
    search_path: Option<OsString>,
) -> Result<Box<dyn Fsys>> {
    if let Some(root) = &config.acme_mount {
        debug!(root = %root.display(), "using configured acme mount");
        return Ok(Box::new(Mount::new(root)));
    }

    if default.join("index").exists() {
        debug!(root = %default.display(), "using acme mount");
        return Ok(Box::new(Mount::new(default)));
    }

    let cwd = env::current_dir().map_err(|e| Error::io("failed to get working directory", e))?;
    let program =
        which::which_in(NINEP_PROGRAM, search_path, cwd).map_err(|_| ConfigError::NoAcme)?;
    debug!(program = %program.display(), "using 9p client");
    Ok(Box::new(NineP::new(program)))
}

/// Open a new window named `name` showing `content`.
///
/// The tag gets the `CryptPut` marker. If any step after creation fails
/// the window is deleted before the error is returned.
pub fn create_window(fsys: &dyn Fsys, name: &Path, content: &[u8]) -> Result<u32> {
    let mut win =
        window::Window::create(fsys).map_err(|e| Error::io("failed to create acme window", e))?;

    if let Err(e) = fill_window(&mut win, name, content) {
        if let Err(del) = win.delete() {
            warn!(id = win.id(), error = %del, "failed to delete acme window");
        }
        return Err(e);
    }

    debug!(id = win.id(), name = %name.display(), bytes = content.len(), "opened acme window");
    Ok(win.id())
}

fn fill_window(win: &mut Window<'_>, name: &Path, content: &[u8]) -> Result<()> {
    win.set_name(name)
        .map_err(|e| Error::io("failed to set window name", e))?;
    win.write("tag", TAG_MARKER.as_bytes())
        .map_err(|e| Error::io("failed to append CryptPut to tag", e))?;
    win.write("body", content)
        .map_err(|e| Error::io("failed to write to acme window body", e))?;
    Ok(())
}

/// Read the id of the window this command was run from.
pub fn current_window_id() -> Result<u32> {
    parse_window_id(env::var(WINID_VAR).ok().as_deref())
}

fn parse_window_id(raw: Option<&str>) -> Result<u32> {
    let raw = raw
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::NotInEditor(format!("{} not set", WINID_VAR)))?;
    raw.trim()
        .parse()
        .map_err(|e| Error::NotInEditor(format!("invalid {} {:?}: {}", WINID_VAR, raw, e)))
}

/// Read the body and file name of the window this command was run from.
///
/// Fails with `NotInEditor` before contacting acme if `winid` is unset.
pub fn read_current_window(config: &Config) -> Result<(Zeroizing<Vec<u8>>, PathBuf)> {
    let id = current_window_id()?;
    let fsys = connect(config)?;
    read_window(fsys.as_ref(), id)
}

/// Read the body and file name of window `id`.
///
/// The name is the first word of the tag, made absolute against the
/// working directory. Window files are closed before returning.
pub fn read_window(fsys: &dyn Fsys, id: u32) -> Result<(Zeroizing<Vec<u8>>, PathBuf)> {
    let mut win =
        Window::open(fsys, id).map_err(|e| Error::io("failed to open acme window", e))?;

    let tag = win
        .read_all("tag")
        .map_err(|e| Error::io("failed to read acme window tag", e))?;
    let tag = String::from_utf8_lossy(&tag);
    let name = tag.split_whitespace().next().ok_or_else(|| {
        Error::io(
            "failed to read acme window name",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "empty tag"),
        )
    })?;
    let name = path::absolutize(Path::new(name))?;

    let body = Zeroizing::new(
        win.read_all("body")
            .map_err(|e| Error::io("failed to read acme window body", e))?,
    );
    win.close_files();

    debug!(id, name = %name.display(), bytes = body.len(), "read acme window");
    Ok((body, name))
}
