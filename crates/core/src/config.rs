// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emitter configuration
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! meta_events = true
//! missing_event = "strict"
//! max_listeners = 25
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Listener count above which a possible leak is logged
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax error or unknown value
    #[error("TOML syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What removal operations do when the named event was never registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEventPolicy {
    /// Treat the removal as a no-op
    #[default]
    Lenient,
    /// Fail with [`MissingEventError`](crate::MissingEventError)
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterConfig {
    /// Emit `addlistener:<event>` / `rmlistener:<event>` on registration changes
    pub meta_events: bool,
    pub missing_event: MissingEventPolicy,
    /// 0 disables the leak warning
    pub max_listeners: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            meta_events: true,
            missing_event: MissingEventPolicy::Lenient,
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

impl EmitterConfig {
    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn with_meta_events(mut self, enabled: bool) -> Self {
        self.meta_events = enabled;
        self
    }

    pub fn with_missing_event(mut self, policy: MissingEventPolicy) -> Self {
        self.missing_event = policy;
        self
    }

    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.max_listeners = max;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.missing_event == MissingEventPolicy::Strict
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
