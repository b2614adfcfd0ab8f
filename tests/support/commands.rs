//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;

/// Variables the binaries read; cleared so the host environment cannot
/// leak into a test.
const CLEARED_VARS: &[&str] = &[
    "ACME_CRYPT_BACKEND",
    "ACME_CRYPT_RCPT",
    "ACME_CRYPT_GPG",
    "ACME_CRYPT_MNT",
    "ACME_CRYPT_LOG",
    "winid",
    "DISPLAY",
    "FAKE_GPG_FAIL",
];

/// Recipient used by every test that encrypts.
pub const RECIPIENT: &str = "glenda@example.com";

impl Test {
    fn bin(&self, name: &str) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin(name).expect("failed to find binary");
        for var in CLEARED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.env("ACME_CRYPT_GPG", &self.gpg);
        cmd.env("ACME_CRYPT_RCPT", RECIPIENT);
        cmd.env("ACME_CRYPT_MNT", self.acme.root());
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// CryptGet with the fake gpg and the simulated acme.
    pub fn get(&self) -> Command {
        self.bin("CryptGet")
    }

    /// CryptPut with the fake gpg and the simulated acme.
    pub fn put(&self) -> Command {
        self.bin("CryptPut")
    }

    /// CryptPut run from acme window `id`.
    pub fn put_from_window(&self, id: u32) -> Command {
        let mut cmd = self.put();
        cmd.env("winid", id.to_string());
        cmd
    }
}
