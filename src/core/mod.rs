//! Core library components.
//!
//! Backend selection and the gpg backend, the acme window adapter, path
//! helpers and configuration.

pub mod acme;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod path;
