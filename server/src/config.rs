//! Server configuration.
//!
//! Values are layered with figment: built-in defaults, then `todo.toml` in
//! the working directory, then `TODO_`-prefixed environment variables.
//! Nested keys use a double underscore, e.g. `TODO_STORAGE__BACKEND=memory`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{DocumentStore, MemoryStore, StoreError, TodoStore};

pub const CONFIG_FILE: &str = "todo.toml";
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),
    #[error("port must be non-zero")]
    InvalidPort,
    #[error("storage.path must be set for the sled backend")]
    EmptyStoragePath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory of the sled database. Ignored by the memory backend.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sled,
            path: PathBuf::from("./data/todos"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Default tracing filter; `RUST_LOG` takes precedence when set.
    pub log_level: String,
    pub storage: StorageConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from `todo.toml` and the environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment(CONFIG_FILE).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment(file: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.storage.backend == StorageBackend::Sled
            && self.storage.path.as_os_str().is_empty()
        {
            return Err(ConfigError::EmptyStoragePath);
        }
        Ok(())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Construct the configured store backend.
    pub fn open_store(&self) -> Result<Arc<dyn TodoStore>, StoreError> {
        Ok(match self.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::Sled => Arc::new(DocumentStore::open(&self.storage.path)?),
        })
    }
}
