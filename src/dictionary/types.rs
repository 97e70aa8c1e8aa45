//! Dictionary domain types.
//!
//! Field names on the wire follow the public JSON contract of the lookup
//! service (camelCase, with a few historical exceptions).

use serde::{Deserialize, Serialize};

/// Grammatical type of a word. Reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordType {
    pub id: i32,
    pub name: String,
    #[serde(rename = "SpeechPart")]
    pub speech_part: String,
}

/// Translation attached to a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTranslation {
    pub id: i32,
    pub lang: String,
    pub content: String,
    pub word_id: i32,
}

/// A base (canonical) dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: i32,
    pub name: String,
    pub name_stressed: String,
    pub name_broken: String,
    pub type_id: i32,
    #[serde(rename = "wordType")]
    pub word_type: Option<WordType>,
    pub translation: Option<WordTranslation>,
}

/// An inflected or derived surface form of a base word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivativeForm {
    pub id: i32,
    pub name: String,
    pub name_broken: String,
    pub name_stressed: String,
    pub is_infinitive: i32,
    pub description: String,
    pub base_word_id: i32,
    #[serde(rename = "word")]
    pub base_word: Word,
}

impl DerivativeForm {
    /// Whether the embedded base word is the one `base_word_id` points at.
    pub fn is_consistent(&self) -> bool {
        self.base_word.id == self.base_word_id
    }
}

/// Answer to a query: a base word, plus the derivative form that matched
/// when the query hit an inflected form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
    pub base_word: Word,
    pub derivative: Option<DerivativeForm>,
}

impl WordResult {
    /// Result for a canonical-name match.
    pub fn base(word: Word) -> Self {
        Self {
            base_word: word,
            derivative: None,
        }
    }

    /// Result for a derivative match; the base word is the derivative's own.
    pub fn derived(derivative: DerivativeForm) -> Self {
        Self {
            base_word: derivative.base_word.clone(),
            derivative: Some(derivative),
        }
    }

    /// Whether the query matched an inflected form.
    pub fn is_derived(&self) -> bool {
        self.derivative.is_some()
    }
}

/// A word together with all of its derivative forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordWithDerivatives {
    pub word: Word,
    pub derivative_forms: Vec<DerivativeForm>,
}

/// A known misspelling and the word it corrects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectForm {
    pub id: i32,
    pub name: String,
    pub correct_word_id: i32,
}
