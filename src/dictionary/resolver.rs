//! Word resolution: fallback lookups over a word store.

use std::sync::Arc;

use tracing::{debug, warn};

use super::batch::{all_or_nothing_batch, best_effort_aggregate};
use super::normalize::{normalize_derivative_form, normalize_derivative_row, normalize_joined};
use super::types::{DerivativeForm, Word, WordResult, WordWithDerivatives};
use crate::config::ResolverConfig;
use crate::error::{DictError, Result};
use crate::storage::{JoinedRow, WordStore};

/// Resolves queries and ids into dictionary entries.
///
/// Holds no per-request state; one instance is shared across requests.
#[derive(Clone)]
pub struct WordResolver {
    store: Arc<dyn WordStore>,
    batch_concurrency: usize,
}

impl WordResolver {
    /// Create a resolver with default settings.
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self::with_config(store, &ResolverConfig::default())
    }

    /// Create a resolver from configuration.
    pub fn with_config(store: Arc<dyn WordStore>, config: &ResolverConfig) -> Self {
        Self {
            store,
            batch_concurrency: config.batch_concurrency.max(1),
        }
    }

    /// Backend name of the underlying store.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Resolve a single word by id.
    ///
    /// A missing row is `NotFound`; a store failure is propagated as is.
    pub async fn resolve_by_id(&self, id: i32) -> Result<Word> {
        debug!(id, "Fetching word by id");
        match self.store.fetch_word_by_id(id).await {
            Ok(Some(row)) => {
                let row = JoinedRow::Word(row);
                debug!(id, kind = row.kind(), "Fetched row");
                Ok(normalize_joined(row).base_word)
            }
            Ok(None) => {
                debug!(id, "No word for id");
                Err(DictError::word_not_found(id))
            }
            Err(e) => {
                warn!(id, error = %e, "Word fetch failed");
                Err(e)
            }
        }
    }

    /// All derivative forms of the word with the given id.
    ///
    /// Fails if the base word cannot be resolved; no forms is an empty list.
    pub async fn resolve_derived_forms_of(&self, id: i32) -> Result<Vec<DerivativeForm>> {
        let word = self.resolve_by_id(id).await?;
        self.derived_forms_for(&word).await
    }

    async fn derived_forms_for(&self, word: &Word) -> Result<Vec<DerivativeForm>> {
        debug!(id = word.id, "Fetching derivative forms by base id");
        let rows = self
            .store
            .fetch_derivative_forms_by_base_id(word.id)
            .await
            .map_err(|e| {
                warn!(id = word.id, error = %e, "Derivative fetch failed");
                e
            })?;

        Ok(rows
            .into_iter()
            .map(|raw| normalize_derivative_form(raw, word.clone()))
            .collect())
    }

    /// Every derivative form whose surface string equals `query`.
    pub async fn find_derivative_matches(&self, query: &str) -> Result<Vec<DerivativeForm>> {
        debug!(query, "Fetching derivative forms by query");
        let rows = self
            .store
            .fetch_derivative_forms_by_query(query)
            .await
            .map_err(|e| {
                warn!(query, error = %e, "Derivative fetch failed");
                e
            })?;

        Ok(rows.into_iter().map(normalize_derivative_row).collect())
    }

    /// Resolve a query string with derivative-first fallback.
    ///
    /// 1. If any derivative form matches, return only the first one, with its
    ///    base word. Canonical names are not consulted.
    /// 2. Otherwise return every word whose canonical name matches.
    /// 3. Otherwise return an empty list.
    ///
    /// A failed derivative fetch is logged and falls through to step 2; a
    /// failed canonical fetch is returned.
    pub async fn resolve_by_query(&self, query: &str) -> Result<Vec<WordResult>> {
        debug!(query, "Fetching derivative forms by query");
        match self.store.fetch_derivative_forms_by_query(query).await {
            Ok(rows) => {
                // TODO: confirm with product whether every derivative match should be returned
                if let Some(first) = rows.into_iter().next() {
                    let row = JoinedRow::Derivative(first);
                    debug!(query, kind = row.kind(), "Derivative match");
                    return Ok(vec![normalize_joined(row)]);
                }
            }
            Err(e) => warn!(query, error = %e, "Derivative fetch failed"),
        }

        debug!(query, "No derivative match, falling back to canonical name");
        let rows = self.store.fetch_words_by_name(query).await.map_err(|e| {
            warn!(query, error = %e, "Canonical name fetch failed");
            e
        })?;

        debug!(query, matches = rows.len(), "Canonical name lookup done");
        Ok(rows
            .into_iter()
            .map(|row| normalize_joined(JoinedRow::NameMatch(row)))
            .collect())
    }

    /// Resolve many queries, best effort.
    ///
    /// Results are flattened in input order. A query whose lookup fails is
    /// logged and contributes nothing.
    pub async fn resolve_many_by_query(&self, queries: Vec<String>) -> Vec<WordResult> {
        best_effort_aggregate(queries, self.batch_concurrency, |query: String| async move {
            self.resolve_by_query(&query).await
        })
        .await
    }

    /// Resolve many ids with their derivative forms, all or nothing.
    ///
    /// The first id (in input order) that fails fails the whole batch.
    pub async fn resolve_many_by_id(&self, ids: Vec<i32>) -> Result<Vec<WordWithDerivatives>> {
        all_or_nothing_batch(ids, self.batch_concurrency, |id| async move {
            let word = self.resolve_by_id(id).await?;
            let derivative_forms = self.derived_forms_for(&word).await?;
            Ok(WordWithDerivatives {
                word,
                derivative_forms,
            })
        })
        .await
    }
}
