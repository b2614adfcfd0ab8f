//! Access to acme's file tree.
//!
//! acme serves its windows as files (`new/ctl`, `<id>/ctl`, `<id>/tag`,
//! `<id>/body`, ...). On Plan 9 the tree is mounted at `/mnt/acme`; under
//! plan9port it is usually reached through the `9p` client instead.

use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, Read, Seek, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::core::constants::ACME_SERVICE;

/// An open window file.
pub trait WinFile: Read + Write {
    /// Position the next read at the start of the file.
    fn rewind(&mut self) -> io::Result<()>;
}

/// A way of opening files in acme's tree.
pub trait Fsys {
    /// Open `path` (relative to the acme root) for reading and writing.
    fn open(&self, path: &str) -> io::Result<Box<dyn WinFile>>;
}

impl WinFile for File {
    fn rewind(&mut self) -> io::Result<()> {
        Seek::rewind(self)
    }
}

/// acme's tree mounted as a directory.
#[derive(Debug, Clone)]
pub struct Mount {
    root: PathBuf,
}

impl Mount {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fsys for Mount {
    fn open(&self, path: &str) -> io::Result<Box<dyn WinFile>> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.root.join(path))?;
        Ok(Box::new(file))
    }
}

/// acme reached through plan9port's `9p` client.
#[derive(Debug, Clone)]
pub struct NineP {
    program: PathBuf,
}

impl NineP {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Fsys for NineP {
    fn open(&self, path: &str) -> io::Result<Box<dyn WinFile>> {
        Ok(Box::new(NinePFile {
            program: self.program.clone(),
            path: format!("{}/{}", ACME_SERVICE, path),
            contents: None,
        }))
    }
}

/// File handle backed by `9p read` / `9p write` invocations.
///
/// The first read fetches the whole file; every write is sent on its own.
struct NinePFile {
    program: PathBuf,
    path: String,
    contents: Option<Cursor<Vec<u8>>>,
}

impl NinePFile {
    fn run(&self, verb: &str, input: Option<&[u8]>) -> io::Result<Vec<u8>> {
        trace!(verb, path = %self.path, "running 9p");
        let mut child = Command::new(&self.program)
            .args([verb, self.path.as_str()])
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let written = match (child.stdin.take(), input) {
            (Some(mut stdin), Some(data)) => stdin.write_all(data),
            _ => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(io::Error::other(format!(
                "9p {} {} failed ({}): {}",
                verb,
                self.path,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written?;
        Ok(output.stdout)
    }
}

impl Read for NinePFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.contents.is_none() {
            self.contents = Some(Cursor::new(self.run("read", None)?));
        }
        match self.contents.as_mut() {
            Some(contents) => contents.read(buf),
            None => Ok(0),
        }
    }
}

impl Write for NinePFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.run("write", Some(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WinFile for NinePFile {
    fn rewind(&mut self) -> io::Result<()> {
        self.contents = None;
        Ok(())
    }
}
