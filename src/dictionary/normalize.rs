//! Row normalization: raw joined rows into domain objects.
//!
//! Absent strings become `""`, absent numbers become `0`, and absent
//! relations stay `None`. Nothing here fails.

use super::types::{DerivativeForm, Word, WordResult, WordTranslation, WordType};
use crate::storage::{
    DerivativeRow, JoinedRow, RawDerivativeForm, RawTranslation, RawWord, RawWordType, WordRow,
};

pub fn normalize_word_type(raw: Option<RawWordType>) -> Option<WordType> {
    raw.map(|t| WordType {
        id: t.id,
        name: t.name.unwrap_or_default(),
        speech_part: t.speech_part.unwrap_or_default(),
    })
}

pub fn normalize_translation(raw: Option<RawTranslation>) -> Option<WordTranslation> {
    raw.map(|t| WordTranslation {
        id: t.id,
        lang: t.lang.unwrap_or_default(),
        content: t.content.unwrap_or_default(),
        word_id: t.word_id.unwrap_or_default(),
    })
}

pub fn normalize_word(
    raw: RawWord,
    raw_type: Option<RawWordType>,
    raw_translation: Option<RawTranslation>,
) -> Word {
    Word {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        name_stressed: raw.name_stressed.unwrap_or_default(),
        name_broken: raw.name_broken.unwrap_or_default(),
        type_id: raw.type_id.unwrap_or_default(),
        word_type: normalize_word_type(raw_type),
        translation: normalize_translation(raw_translation),
    }
}

/// Normalize a word joined with its type and translation.
pub fn normalize_word_row(row: WordRow) -> Word {
    normalize_word(row.word, row.word_type, row.translation)
}

/// Normalize a derivative form around an already-resolved base word.
pub fn normalize_derivative_form(raw: RawDerivativeForm, base_word: Word) -> DerivativeForm {
    DerivativeForm {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        name_broken: raw.name_broken.unwrap_or_default(),
        name_stressed: raw.name_stressed.unwrap_or_default(),
        is_infinitive: raw.is_infinitive.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        base_word_id: raw.base_word_id.unwrap_or_default(),
        base_word,
    }
}

/// Normalize a derivative form joined with its base word's components.
pub fn normalize_derivative_row(row: DerivativeRow) -> DerivativeForm {
    normalize_derivative_form(row.derivative, normalize_word_row(row.base))
}

/// Normalize any joined row shape into a query result.
pub fn normalize_joined(row: JoinedRow) -> WordResult {
    match row {
        JoinedRow::Word(row) | JoinedRow::NameMatch(row) => {
            WordResult::base(normalize_word_row(row))
        }
        JoinedRow::Derivative(row) => WordResult::derived(normalize_derivative_row(row)),
    }
}
