//! acme-crypt - edit encrypted files in acme.
//!
//! `CryptGet file.gpg` decrypts a file into a new acme window whose tag
//! carries a `CryptPut` command; `CryptPut` encrypts the window body back
//! to disk.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── bin/              # CryptGet and CryptPut entry points
//! ├── cli/              # Command flows and terminal output
//! │   ├── get           # decrypt-and-display
//! │   ├── put           # read-then-encrypt-and-save
//! │   └── output        # stderr helpers
//! └── core/             # Core library components
//!     ├── config        # flags and environment
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Crypter trait
//!     │   ├── registry  # name -> constructor
//!     │   └── gpg       # gpg CLI implementation
//!     ├── acme/         # Window adapter
//!     │   ├── fsys      # mounted tree or 9p client
//!     │   └── window    # ctl/tag/body access
//!     └── path          # encrypted suffix helpers
//! ```

pub mod cli;
pub mod core;
pub mod error;
