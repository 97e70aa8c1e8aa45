//! Storage trait definitions.

use async_trait::async_trait;

use super::rows::{DerivativeRow, RawDerivativeForm, WordRow};
use crate::error::Result;

/// Data-access collaborator for dictionary lookups.
///
/// Each method is a single round trip with no retry. "No rows" is an empty
/// result; only a failure to talk to the store is an error.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Derivative forms whose surface name equals `query`, each joined with
    /// its owning word, in store order.
    async fn fetch_derivative_forms_by_query(&self, query: &str) -> Result<Vec<DerivativeRow>>;

    /// The word with the given id, if any.
    async fn fetch_word_by_id(&self, id: i32) -> Result<Option<WordRow>>;

    /// Words whose canonical name equals `name`, in store order.
    async fn fetch_words_by_name(&self, name: &str) -> Result<Vec<WordRow>>;

    /// Derivative forms owned by the word with the given id.
    async fn fetch_derivative_forms_by_base_id(&self, id: i32) -> Result<Vec<RawDerivativeForm>>;

    /// Backend name for diagnostics.
    fn backend_name(&self) -> &'static str;
}
