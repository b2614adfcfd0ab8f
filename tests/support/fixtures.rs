//! Test fixtures: a fake gpg and a simulated acme file tree.

use std::fs;
use std::path::{Path, PathBuf};

/// Stand-in for gpg.
///
/// Encrypting prefixes stdin with `ARMOR:` and writes it to `--output`;
/// decrypting strips the prefix from the named file. When
/// `FAKE_GPG_FAIL` is set it prints that to stderr and exits 2.
pub const FAKE_GPG: &str = r#"#!/bin/sh
out=""
last=""
mode=""
while [ $# -gt 0 ]; do
  case "$1" in
    --output) out="$2"; shift 2; continue ;;
    --encrypt) mode=encrypt ;;
    --decrypt) mode=decrypt ;;
  esac
  last="$1"
  shift
done
if [ -n "$FAKE_GPG_FAIL" ]; then
  echo "gpg: $FAKE_GPG_FAIL" >&2
  exit 2
fi
if [ "$mode" = encrypt ]; then
  { printf 'ARMOR:'; cat; } > "$out"
else
  sed 's/^ARMOR://' "$last"
fi
"#;

/// Ciphertext the fake gpg decrypts to `plaintext`.
pub fn armored(plaintext: &str) -> String {
    format!("ARMOR:{}", plaintext)
}

/// Install the fake gpg at `path`.
#[cfg(unix)]
pub fn write_fake_gpg(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, FAKE_GPG).expect("failed to write fake gpg");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("failed to make fake gpg executable");
}

/// A directory laid out like acme's mounted file tree.
///
/// Reading `new/ctl` yields the id prepared by [`Acme::prepare_new`];
/// window files are plain files, so written content can be inspected.
pub struct Acme {
    root: PathBuf,
}

impl Acme {
    pub fn new(root: PathBuf) -> Self {
        fs::create_dir_all(&root).expect("failed to create acme root");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make the next window created through `new/ctl` get `id`.
    pub fn prepare_new(&self, id: u32) {
        self.window(id, "", "");
        fs::create_dir_all(self.root.join("new")).unwrap();
        fs::write(
            self.root.join("new/ctl"),
            format!("{:>11} {:>11} {:>11} {:>11} {:>11} ", id, 0, 0, 0, 0),
        )
        .unwrap();
    }

    /// Create window `id` with the given tag and body.
    pub fn window(&self, id: u32, tag: &str, body: &str) {
        let dir = self.root.join(id.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ctl"), "").unwrap();
        fs::write(dir.join("tag"), tag).unwrap();
        fs::write(dir.join("body"), body).unwrap();
    }

    /// Contents of a window file such as `7/ctl`.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path)).unwrap_or_default()
    }

    /// Make writes to a window file fail by replacing it with a directory.
    pub fn break_file(&self, path: &str) {
        let target = self.root.join(path);
        fs::remove_file(&target).unwrap();
        fs::create_dir(&target).unwrap();
    }
}
