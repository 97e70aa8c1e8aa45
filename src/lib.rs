//! bgdict: dictionary lookup service
//!
//! Resolves a word or query string to its canonical base word, grammatical
//! type and translation, plus the derivative form it matched when the query
//! is an inflected form. Served over HTTP on top of a MySQL dictionary.

pub mod api;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod storage;

pub use api::{create_rest_router, ApiState, RestApiConfig};
pub use config::Config;
pub use dictionary::{
    DerivativeForm, IncorrectForm, Word, WordResolver, WordResult, WordTranslation, WordType,
    WordWithDerivatives,
};
pub use error::{ConfigError, DictError, Result, StorageError};
pub use storage::{create_store, MemoryWordStore, MySqlWordStore, WordStore};
