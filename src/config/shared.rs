// SPDX-License-Identifier: MPL-2.0
//! Installed configuration handle.
//!
//! The host application installs a [`Config`] once at startup (or replaces
//! it wholesale later) and passes clones of the handle to the manager and
//! the overlay. Readers take a snapshot; a replacement never mutates a
//! snapshot that is already being read.

use super::Config;
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// Cloneable handle to the currently installed configuration.
#[derive(Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<Config>>,
}

impl SharedConfig {
    /// Creates a handle with `config` installed.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Replaces the installed configuration for every clone of this handle.
    pub fn install(&self, config: Config) {
        tracing::debug!("installing toast configuration");
        self.inner.store(Arc::new(config));
    }

    /// Returns a snapshot of the installed configuration.
    #[must_use]
    pub fn current(&self) -> Arc<Config> {
        self.inner.load_full()
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl From<Config> for SharedConfig {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedConfig")
            .field("current", &*self.inner.load())
            .finish()
    }
}
