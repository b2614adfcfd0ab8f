//! Backend registry: maps a backend name to its constructor.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Crypter, Gpg};
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Builds a crypter from configuration.
pub type Constructor = Box<dyn Fn(&Config) -> Result<Box<dyn Crypter>>>;

/// Named backend constructors.
///
/// `Registry::default()` knows `gpg`. More backends can be added with
/// [`Registry::register`] before the first [`Registry::resolve`].
pub struct Registry {
    backends: BTreeMap<String, Constructor>,
}

impl Registry {
    /// Registry with no backends.
    pub fn empty() -> Self {
        Self {
            backends: BTreeMap::new(),
        }
    }

    /// Register (or replace) the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&Config) -> Result<Box<dyn Crypter>> + 'static,
    {
        self.backends.insert(name.into(), Box::new(constructor));
    }

    /// Registered backend names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.backends.keys().map(String::as_str).collect()
    }

    /// Construct the backend selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedBackend` for an unknown name, or
    /// whatever the backend's constructor reports.
    pub fn resolve(&self, config: &Config) -> Result<Box<dyn Crypter>> {
        let name = config.backend_name();
        let constructor =
            self.backends
                .get(name)
                .ok_or_else(|| ConfigError::UnsupportedBackend {
                    name: name.to_string(),
                    supported: self.names().join(", "),
                })?;
        debug!(backend = name, "creating crypter");
        constructor(config)
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("gpg", |config: &Config| {
            Ok(Box::new(Gpg::from_config(config)?) as Box<dyn Crypter>)
        });
        registry
    }
}
