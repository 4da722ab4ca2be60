// src/repositories/keyword_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use rusqlite::params;

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Locale → keywords, each list in editor order
pub type KeywordsByLocale = BTreeMap<String, Vec<String>>;

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait KeywordRepository: Send + Sync {
    /// Keywords of a publication for the given locales.
    /// An empty locale list means every locale.
    fn get_keywords(&self, publication_id: i64, locales: &[String]) -> AppResult<KeywordsByLocale>;

    /// Replace the keywords of one publication/locale pair
    fn replace_keywords(
        &self,
        publication_id: i64,
        locale: &str,
        keywords: &[String],
    ) -> AppResult<()>;
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
pub struct SqliteKeywordRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeywordRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeywordRepository for SqliteKeywordRepository {
    fn get_keywords(&self, publication_id: i64, locales: &[String]) -> AppResult<KeywordsByLocale> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT locale, keyword
             FROM submission_keywords
             WHERE publication_id = ?1
             ORDER BY locale, seq",
        )?;

        let rows = stmt
            .query_map(params![publication_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut keywords = KeywordsByLocale::new();
        for (locale, keyword) in rows {
            if locales.is_empty() || locales.iter().any(|l| *l == locale) {
                keywords.entry(locale).or_default().push(keyword);
            }
        }

        Ok(keywords)
    }

    fn replace_keywords(
        &self,
        publication_id: i64,
        locale: &str,
        keywords: &[String],
    ) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM submission_keywords WHERE publication_id = ?1 AND locale = ?2",
            params![publication_id, locale],
        )?;

        for (seq, keyword) in keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .enumerate()
        {
            tx.execute(
                "INSERT INTO submission_keywords (publication_id, locale, seq, keyword)
                 VALUES (?1, ?2, ?3, ?4)",
                params![publication_id, locale, seq as i64, keyword],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}
