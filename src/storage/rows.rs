//! Raw rows as returned by a word store.
//!
//! Every non-key column is optional because the underlying columns are
//! nullable; outer-joined relations are `None` when the joined key is null.

use serde::{Deserialize, Serialize};

/// One row of the `word` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWord {
    pub id: i32,
    pub name: Option<String>,
    pub name_stressed: Option<String>,
    pub name_broken: Option<String>,
    pub type_id: Option<i32>,
}

/// One row of the `word_type` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWordType {
    pub id: i32,
    pub name: Option<String>,
    pub speech_part: Option<String>,
}

/// One row of the `word_translation` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTranslation {
    pub id: i32,
    pub lang: Option<String>,
    pub content: Option<String>,
    pub word_id: Option<i32>,
}

/// One row of the `derivative_form` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDerivativeForm {
    pub id: i32,
    pub name: Option<String>,
    pub name_broken: Option<String>,
    pub name_stressed: Option<String>,
    pub description: Option<String>,
    pub is_infinitive: Option<i32>,
    pub base_word_id: Option<i32>,
}

/// A word joined with its type and translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRow {
    pub word: RawWord,
    pub word_type: Option<RawWordType>,
    pub translation: Option<RawTranslation>,
}

/// A derivative form joined with its owning word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivativeRow {
    pub derivative: RawDerivativeForm,
    pub base: WordRow,
}

/// The joined row shapes a lookup can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinedRow {
    /// A word fetched by id.
    Word(WordRow),
    /// A derivative form matched by surface string, with its base word.
    Derivative(DerivativeRow),
    /// A word matched by canonical name.
    NameMatch(WordRow),
}

impl JoinedRow {
    /// Short label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JoinedRow::Word(_) => "word",
            JoinedRow::Derivative(_) => "derivative",
            JoinedRow::NameMatch(_) => "name_match",
        }
    }
}
