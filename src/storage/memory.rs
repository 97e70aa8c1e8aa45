//! In-memory word store for testing, demos and small local datasets.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::rows::{
    DerivativeRow, RawDerivativeForm, RawTranslation, RawWord, RawWordType, WordRow,
};
use super::traits::WordStore;
use crate::error::{Result, StorageError};

/// Table contents of a memory store, also the JSON seed file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub word_types: Vec<RawWordType>,
    pub words: Vec<RawWord>,
    pub translations: Vec<RawTranslation>,
    pub derivative_forms: Vec<RawDerivativeForm>,
}

/// Word store over in-memory tables.
///
/// Joins behave like the SQL backend: the owning word is an inner join,
/// type and translation are left joins, and results come back ordered by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordStore {
    data: SeedData,
}

impl MemoryWordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over the given tables.
    pub fn from_seed(mut data: SeedData) -> Self {
        data.word_types.sort_by_key(|t| t.id);
        data.words.sort_by_key(|w| w.id);
        data.translations.sort_by_key(|t| t.id);
        data.derivative_forms.sort_by_key(|d| d.id);
        Self { data }
    }

    /// Load tables from a JSON seed file.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StorageError::Seed(format!("{}: {}", path.display(), e)))?;
        let data: SeedData = serde_json::from_str(&content)
            .map_err(|e| StorageError::Seed(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            words = data.words.len(),
            derivative_forms = data.derivative_forms.len(),
            "Loaded seed data"
        );
        Ok(Self::from_seed(data))
    }

    /// Number of base words held.
    pub fn word_count(&self) -> usize {
        self.data.words.len()
    }

    fn join_word(&self, word: &RawWord) -> WordRow {
        let word_type = word
            .type_id
            .and_then(|type_id| self.data.word_types.iter().find(|t| t.id == type_id))
            .cloned();
        let translation = self
            .data
            .translations
            .iter()
            .find(|t| t.word_id == Some(word.id))
            .cloned();

        WordRow {
            word: word.clone(),
            word_type,
            translation,
        }
    }

    fn word_by_id(&self, id: i32) -> Option<&RawWord> {
        self.data.words.iter().find(|w| w.id == id)
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn fetch_derivative_forms_by_query(&self, query: &str) -> Result<Vec<DerivativeRow>> {
        let rows = self
            .data
            .derivative_forms
            .iter()
            .filter(|d| d.name.as_deref() == Some(query))
            .filter_map(|d| {
                let base = self.word_by_id(d.base_word_id?)?;
                Some(DerivativeRow {
                    derivative: d.clone(),
                    base: self.join_word(base),
                })
            })
            .collect();
        Ok(rows)
    }

    async fn fetch_word_by_id(&self, id: i32) -> Result<Option<WordRow>> {
        Ok(self.word_by_id(id).map(|w| self.join_word(w)))
    }

    async fn fetch_words_by_name(&self, name: &str) -> Result<Vec<WordRow>> {
        Ok(self
            .data
            .words
            .iter()
            .filter(|w| w.name.as_deref() == Some(name))
            .map(|w| self.join_word(w))
            .collect())
    }

    async fn fetch_derivative_forms_by_base_id(&self, id: i32) -> Result<Vec<RawDerivativeForm>> {
        Ok(self
            .data
            .derivative_forms
            .iter()
            .filter(|d| d.base_word_id == Some(id))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
