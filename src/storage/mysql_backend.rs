//! MySQL word store backed by an sqlx connection pool.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{FromRow, Row};
use tracing::debug;

use super::rows::{
    DerivativeRow, RawDerivativeForm, RawTranslation, RawWord, RawWordType, WordRow,
};
use super::traits::WordStore;
use crate::config::MysqlConfig;
use crate::error::Result;

const DERIVATIVES_BY_QUERY: &str = r#"
    SELECT
        df.id AS df_id, df.name AS df_name, df.name_broken AS df_name_broken,
        df.name_stressed AS df_name_stressed, df.description AS df_description,
        df.is_infinitive AS df_is_infinitive, df.base_word_id AS df_base_word_id,
        w.id AS w_id, w.name AS w_name, w.name_stressed AS w_name_stressed,
        w.name_broken AS w_name_broken, w.type_id AS w_type_id,
        wt.id AS wt_id, wt.name AS wt_name, wt.speech_part AS wt_speech_part,
        tr.id AS tr_id, tr.lang AS tr_lang, tr.content AS tr_content, tr.word_id AS tr_word_id
    FROM derivative_form df
    JOIN word w ON w.id = df.base_word_id
    LEFT JOIN word_type wt ON wt.id = w.type_id
    LEFT JOIN word_translation tr ON tr.word_id = w.id
    WHERE df.name = ?
    ORDER BY df.id
"#;

const WORD_BY_ID: &str = r#"
    SELECT
        w.id AS w_id, w.name AS w_name, w.name_stressed AS w_name_stressed,
        w.name_broken AS w_name_broken, w.type_id AS w_type_id,
        wt.id AS wt_id, wt.name AS wt_name, wt.speech_part AS wt_speech_part,
        tr.id AS tr_id, tr.lang AS tr_lang, tr.content AS tr_content, tr.word_id AS tr_word_id
    FROM word w
    LEFT JOIN word_type wt ON wt.id = w.type_id
    LEFT JOIN word_translation tr ON tr.word_id = w.id
    WHERE w.id = ?
    LIMIT 1
"#;

const WORDS_BY_NAME: &str = r#"
    SELECT
        w.id AS w_id, w.name AS w_name, w.name_stressed AS w_name_stressed,
        w.name_broken AS w_name_broken, w.type_id AS w_type_id,
        wt.id AS wt_id, wt.name AS wt_name, wt.speech_part AS wt_speech_part,
        tr.id AS tr_id, tr.lang AS tr_lang, tr.content AS tr_content, tr.word_id AS tr_word_id
    FROM word w
    LEFT JOIN word_type wt ON wt.id = w.type_id
    LEFT JOIN word_translation tr ON tr.word_id = w.id
    WHERE w.name = ?
    ORDER BY w.id
"#;

const DERIVATIVES_BY_BASE_ID: &str = r#"
    SELECT
        df.id AS df_id, df.name AS df_name, df.name_broken AS df_name_broken,
        df.name_stressed AS df_name_stressed, df.description AS df_description,
        df.is_infinitive AS df_is_infinitive, df.base_word_id AS df_base_word_id
    FROM derivative_form df
    WHERE df.base_word_id = ?
    ORDER BY df.id
"#;

/// Word store over a MySQL database using the schema in `migrations/`.
#[derive(Clone)]
pub struct MySqlWordStore {
    pool: MySqlPool,
}

impl MySqlWordStore {
    /// Build a store whose pool connects on first use.
    pub fn connect_lazy(config: &MysqlConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(options);

        debug!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "MySQL pool configured"
        );
        Self { pool }
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordStore for MySqlWordStore {
    async fn fetch_derivative_forms_by_query(&self, query: &str) -> Result<Vec<DerivativeRow>> {
        let rows = sqlx::query_as::<_, DerivativeRow>(DERIVATIVES_BY_QUERY)
            .bind(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_word_by_id(&self, id: i32) -> Result<Option<WordRow>> {
        let row = sqlx::query_as::<_, WordRow>(WORD_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_words_by_name(&self, name: &str) -> Result<Vec<WordRow>> {
        let rows = sqlx::query_as::<_, WordRow>(WORDS_BY_NAME)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_derivative_forms_by_base_id(&self, id: i32) -> Result<Vec<RawDerivativeForm>> {
        let rows = sqlx::query_as::<_, RawDerivativeForm>(DERIVATIVES_BY_BASE_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    fn backend_name(&self) -> &'static str {
        "mysql"
    }
}

// Column aliases are prefixed per table: w_, wt_, tr_, df_.

fn decode_word(row: &MySqlRow) -> std::result::Result<RawWord, sqlx::Error> {
    Ok(RawWord {
        id: row.try_get("w_id")?,
        name: row.try_get("w_name")?,
        name_stressed: row.try_get("w_name_stressed")?,
        name_broken: row.try_get("w_name_broken")?,
        type_id: row.try_get("w_type_id")?,
    })
}

fn decode_word_type(row: &MySqlRow) -> std::result::Result<Option<RawWordType>, sqlx::Error> {
    let Some(id) = row.try_get::<Option<i32>, _>("wt_id")? else {
        return Ok(None);
    };
    Ok(Some(RawWordType {
        id,
        name: row.try_get("wt_name")?,
        speech_part: row.try_get("wt_speech_part")?,
    }))
}

fn decode_translation(row: &MySqlRow) -> std::result::Result<Option<RawTranslation>, sqlx::Error> {
    let Some(id) = row.try_get::<Option<i32>, _>("tr_id")? else {
        return Ok(None);
    };
    Ok(Some(RawTranslation {
        id,
        lang: row.try_get("tr_lang")?,
        content: row.try_get("tr_content")?,
        word_id: row.try_get("tr_word_id")?,
    }))
}

impl<'r> FromRow<'r, MySqlRow> for WordRow {
    fn from_row(row: &'r MySqlRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(WordRow {
            word: decode_word(row)?,
            word_type: decode_word_type(row)?,
            translation: decode_translation(row)?,
        })
    }
}

impl<'r> FromRow<'r, MySqlRow> for RawDerivativeForm {
    fn from_row(row: &'r MySqlRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(RawDerivativeForm {
            id: row.try_get("df_id")?,
            name: row.try_get("df_name")?,
            name_broken: row.try_get("df_name_broken")?,
            name_stressed: row.try_get("df_name_stressed")?,
            description: row.try_get("df_description")?,
            is_infinitive: row.try_get("df_is_infinitive")?,
            base_word_id: row.try_get("df_base_word_id")?,
        })
    }
}

impl<'r> FromRow<'r, MySqlRow> for DerivativeRow {
    fn from_row(row: &'r MySqlRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(DerivativeRow {
            derivative: RawDerivativeForm::from_row(row)?,
            base: WordRow::from_row(row)?,
        })
    }
}
