// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tree configuration and a storage port for persisting it as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bbtree_geom::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key under which [`ConfigService`] stores [`TreeConfig`].
pub const TREE_CONFIG_KEY: &str = "bbtree";

/// Tunables applied by [`crate::BoundingBoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Slack added to every face of every box during containment tests.
    pub tolerance: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl TreeConfig {
    /// Rejects negative or non-finite tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTolerance(self.tolerance))
        }
    }
}

/// Byte storage for persisted configuration, keyed by name.
pub trait ConfigStore {
    /// Bytes stored under `key`, or `None` if nothing has been saved yet.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replaces whatever is stored under `key`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError>;
}

/// Failures while loading, saving or validating a [`TreeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing store could not be read or written.
    #[error("config store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not a valid tree config document.
    #[error("malformed tree config: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Tolerance was negative, NaN or infinite.
    #[error("invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),
}

/// Loads and saves the [`TreeConfig`] kept under [`TREE_CONFIG_KEY`].
#[derive(Debug)]
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored configuration, or the default if none was saved.
    ///
    /// A stored document that is empty also yields the default; missing
    /// fields take their default values.
    pub fn load(&self) -> Result<TreeConfig, ConfigError> {
        let config = match self.store.read(TREE_CONFIG_KEY)? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            _ => TreeConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates `config` and persists it as pretty-printed JSON.
    pub fn save(&self, config: &TreeConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = serde_json::to_vec_pretty(config)?;
        self.store.write(TREE_CONFIG_KEY, &bytes)
    }
}

/// [`ConfigStore`] keeping each key in `<base>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirConfigStore {
    base: PathBuf,
}

impl DirConfigStore {
    /// Store rooted at `base`, creating the directory if needed.
    pub fn new(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for DirConfigStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), ConfigError> {
        // Write beside the target and rename so readers never see a partial file.
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, bytes)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
