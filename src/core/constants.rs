//! Constants used throughout acme-crypt.
//!
//! Centralizes environment variable names, file suffixes and acme paths.

/// Selects the encryption backend.
pub const BACKEND_VAR: &str = "ACME_CRYPT_BACKEND";

/// Recipient identity (key id or email) used for encryption.
pub const RECIPIENT_VAR: &str = "ACME_CRYPT_RCPT";

/// Overrides the gpg executable.
pub const GPG_VAR: &str = "ACME_CRYPT_GPG";

/// Directory where acme's file tree is mounted.
pub const MOUNT_VAR: &str = "ACME_CRYPT_MNT";

/// Log filter directives (tracing `EnvFilter` syntax).
pub const LOG_VAR: &str = "ACME_CRYPT_LOG";

/// Id of the acme window a command was run from. Set by acme itself.
pub const WINID_VAR: &str = "winid";

/// Display server, forwarded so pinentry can prompt for a passphrase.
pub const DISPLAY_VAR: &str = "DISPLAY";

/// Backend used when none is configured.
pub const DEFAULT_BACKEND: &str = "gpg";

/// Default gpg executable.
pub const DEFAULT_GPG: &str = "gpg";

/// Suffixes recognized as encrypted files (matched case-insensitively).
pub const ENCRYPTED_SUFFIXES: &[&str] = &[".gpg", ".asc", ".pgp"];

/// Suffix appended when saving.
pub const GPG_SUFFIX: &str = ".gpg";

/// Token appended to the tag of windows opened by CryptGet.
pub const TAG_MARKER: &str = " CryptPut";

/// Where acme's file tree lives on Plan 9 (or under 9pfuse).
pub const DEFAULT_ACME_MOUNT: &str = "/mnt/acme";

/// plan9port's 9P client.
pub const NINEP_PROGRAM: &str = "9p";

/// Service name acme posts in the plan9port namespace.
pub const ACME_SERVICE: &str = "acme";
