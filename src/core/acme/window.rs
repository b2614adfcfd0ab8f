//! A single acme window.

use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::trace;

use super::fsys::{Fsys, WinFile};

/// Handle on an acme window, addressed by id.
///
/// Window files are opened on first use and stay open until
/// [`Window::close_files`] or drop.
pub struct Window<'a> {
    id: u32,
    fsys: &'a dyn Fsys,
    files: HashMap<&'static str, Box<dyn WinFile>>,
}

impl<'a> Window<'a> {
    /// Create a new window by reading `new/ctl`.
    pub fn create(fsys: &'a dyn Fsys) -> io::Result<Self> {
        let mut ctl = fsys.open("new/ctl")?;
        let mut line = String::new();
        ctl.read_to_string(&mut line)?;
        let id = parse_ctl_id(&line)?;
        trace!(id, "created acme window");
        Ok(Self::with_id(fsys, id))
    }

    /// Open an existing window, failing if it does not exist.
    ///
    /// The ctl file is read rather than just opened, since some transports
    /// only contact acme on first access.
    pub fn open(fsys: &'a dyn Fsys, id: u32) -> io::Result<Self> {
        let mut win = Self::with_id(fsys, id);
        win.read_all("ctl")?;
        Ok(win)
    }

    fn with_id(fsys: &'a dyn Fsys, id: u32) -> Self {
        Self {
            id,
            fsys,
            files: HashMap::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    fn file(&mut self, name: &'static str) -> io::Result<&mut Box<dyn WinFile>> {
        if !self.files.contains_key(name) {
            let file = self.fsys.open(&format!("{}/{}", self.id, name))?;
            self.files.insert(name, file);
        }
        self.files
            .get_mut(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name))
    }

    /// Send a control message; a trailing newline is added.
    pub fn ctl(&mut self, msg: &str) -> io::Result<()> {
        trace!(id = self.id, msg, "acme ctl");
        self.write("ctl", format!("{}\n", msg).as_bytes())
    }

    /// Set the window's file name.
    pub fn set_name(&mut self, name: &Path) -> io::Result<()> {
        self.ctl(&format!("name {}", name.display()))
    }

    /// Write to a window file. tag and body writes append.
    pub fn write(&mut self, name: &'static str, data: &[u8]) -> io::Result<()> {
        let file = self.file(name)?;
        file.write_all(data)?;
        file.flush()
    }

    /// Read a window file from the start.
    pub fn read_all(&mut self, name: &'static str) -> io::Result<Vec<u8>> {
        let file = self.file(name)?;
        file.rewind()?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Delete the window, discarding unsaved changes.
    pub fn delete(&mut self) -> io::Result<()> {
        self.ctl("delete")
    }

    /// Close every open window file.
    pub fn close_files(&mut self) {
        self.files.clear();
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        self.close_files();
    }
}

/// The ctl file starts with the window id, then tag length, body length,
/// and flags, each in a padded 11-character field.
fn parse_ctl_id(line: &str) -> io::Result<u32> {
    line.split_whitespace()
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed ctl line: {:?}", line),
            )
        })
}
