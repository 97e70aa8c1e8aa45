//! Storage module: the data-access layer beneath word resolution.
//!
//! This module provides two backends:
//! - `MySqlWordStore`: the production dictionary database
//! - `MemoryWordStore`: in-memory tables loaded from a JSON seed file

mod memory;
mod mysql_backend;
mod rows;
mod traits;

pub use memory::{MemoryWordStore, SeedData};
pub use mysql_backend::MySqlWordStore;
pub use rows::*;
pub use traits::*;

use crate::config::{Config, StorageBackendType};
use crate::error::{ConfigError, Result};
use std::sync::Arc;

/// Create a word store from configuration.
pub fn create_store(config: &Config) -> Result<Arc<dyn WordStore>> {
    match config.storage.backend {
        StorageBackendType::Mysql => {
            let store = MySqlWordStore::connect_lazy(&config.storage.mysql);
            Ok(Arc::new(store))
        }
        StorageBackendType::Memory => {
            let path = config
                .seed_file()
                .ok_or_else(|| ConfigError::MissingField("storage.seed_file".to_string()))?;
            let store = MemoryWordStore::from_seed_file(path)?;
            Ok(Arc::new(store))
        }
    }
}
