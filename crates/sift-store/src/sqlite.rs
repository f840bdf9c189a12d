//! SQLite-backed analysis store.
//!
//! Records are append-only: there is an insert, reads, and a substring search
//! over the serialized `topics`/`keywords` columns. Nothing is ever updated.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use sift_core::{DatabaseLocation, Error, Result, Sentiment};
use tracing::{debug, info};

use crate::schema::SCHEMA_SQL;
use crate::types::{AnalysisRecord, NewAnalysis};

/// Fixed-width UTC timestamps so lexical order in SQLite matches chronological order.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

const SELECT_COLUMNS: &str = "SELECT id, raw_text, summary, title, topics, sentiment, \
                              keywords, confidence, created_at FROM analyses";

/// SQLite store for analysis records.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open or create a file-backed store. Parent directories are created as needed.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }

        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;

        Self::init(conn, Some(db_path.to_path_buf()))
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| Error::Database(e.to_string()))?;
        Self::init(conn, None)
    }

    /// Open the store described by the configured location.
    pub fn from_location(location: &DatabaseLocation) -> Result<Self> {
        match location {
            DatabaseLocation::Memory => Self::open_in_memory(),
            DatabaseLocation::File(path) => Self::open(path),
        }
    }

    fn init(conn: Connection, db_path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        info!(
            "SqliteStore initialized: {} analyses, path={}",
            store.count_analyses()?,
            store
                .db_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".into())
        );
        Ok(store)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    // ---------------------------------------------------------------
    // Writes
    // ---------------------------------------------------------------

    /// Persist an analysis in a single statement. Returns the stored record
    /// with its assigned id and timestamp.
    pub fn insert_analysis(&self, analysis: &NewAnalysis) -> Result<AnalysisRecord> {
        let topics_json = serde_json::to_string(&analysis.topics)?;
        let keywords_json = serde_json::to_string(&analysis.keywords)?;
        let created_at_str = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let created_at = parse_timestamp(&created_at_str)?;

        let conn = self.conn.lock();
        let id = conn
            .prepare_cached(
                "INSERT INTO analyses (raw_text, summary, title, topics, sentiment, \
                 keywords, confidence, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![
                analysis.raw_text,
                analysis.summary,
                analysis.title,
                topics_json,
                analysis.sentiment.as_str(),
                keywords_json,
                analysis.confidence,
                created_at_str,
            ])
            .map_err(|e| Error::Database(e.to_string()))?;
        drop(conn);

        debug!("Stored analysis {} ({} keywords)", id, analysis.keywords.len());

        Ok(AnalysisRecord {
            id,
            raw_text: analysis.raw_text.clone(),
            summary: analysis.summary.clone(),
            title: analysis.title.clone(),
            topics: analysis.topics.clone(),
            sentiment: analysis.sentiment,
            keywords: analysis.keywords.clone(),
            confidence: analysis.confidence,
            created_at,
        })
    }

    // ---------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------

    /// Get an analysis by id.
    pub fn get_analysis(&self, id: i64) -> Result<Option<AnalysisRecord>> {
        let conn = self.conn.lock();
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let record = conn
            .prepare_cached(&sql)
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![id], Self::row_to_record)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(record)
    }

    /// Count stored analyses.
    pub fn count_analyses(&self) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// All analyses, most recent first.
    pub fn list_analyses(&self) -> Result<Vec<AnalysisRecord>> {
        self.search_analyses(None)
    }

    /// Analyses whose serialized topics or keywords contain `topic`
    /// (case-insensitive), most recent first. `None` or an empty term returns everything.
    ///
    /// The match runs against the stored JSON text, so a term may span the
    /// `","` between two list elements.
    pub fn search_analyses(&self, topic: Option<&str>) -> Result<Vec<AnalysisRecord>> {
        let conn = self.conn.lock();
        let order = "ORDER BY created_at DESC, id DESC";

        let records = match topic.filter(|t| !t.is_empty()) {
            Some(term) => {
                let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
                let sql = format!(
                    "{} WHERE lower(topics) LIKE ?1 ESCAPE '\\' \
                     OR lower(keywords) LIKE ?1 ESCAPE '\\' {}",
                    SELECT_COLUMNS, order
                );
                let mut stmt = conn
                    .prepare_cached(&sql)
                    .map_err(|e| Error::Database(e.to_string()))?;
                let rows = stmt
                    .query_map(params![pattern], Self::row_to_record)
                    .map_err(|e| Error::Database(e.to_string()))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            }
            None => {
                let sql = format!("{} {}", SELECT_COLUMNS, order);
                let mut stmt = conn
                    .prepare_cached(&sql)
                    .map_err(|e| Error::Database(e.to_string()))?;
                let rows = stmt
                    .query_map([], Self::row_to_record)
                    .map_err(|e| Error::Database(e.to_string()))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            }
        };

        records.map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Row mapping
    // ---------------------------------------------------------------

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<AnalysisRecord> {
        let topics: String = row.get(4)?;
        let sentiment: String = row.get(5)?;
        let keywords: String = row.get(6)?;
        let created_at: String = row.get(8)?;

        Ok(AnalysisRecord {
            id: row.get(0)?,
            raw_text: row.get(1)?,
            summary: row.get(2)?,
            title: row.get(3)?,
            topics: serde_json::from_str(&topics).map_err(|e| conversion_error(4, e))?,
            sentiment: sentiment
                .parse::<Sentiment>()
                .map_err(|e| conversion_error(5, e))?,
            keywords: serde_json::from_str(&keywords).map_err(|e| conversion_error(6, e))?,
            confidence: row.get(7)?,
            created_at: parse_timestamp(&created_at).map_err(|e| conversion_error(8, e))?,
        })
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Database(format!("Bad timestamp {:?}: {}", s, e)))
}

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn analysis(topics: &[&str], keywords: &[&str]) -> NewAnalysis {
        NewAnalysis {
            raw_text: "Some source text.".into(),
            summary: "A summary.".into(),
            title: Some("A title".into()),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            sentiment: Sentiment::Neutral,
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            confidence: 0.8,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = SqliteStore::open_in_memory().unwrap();
        let stored = store
            .insert_analysis(&analysis(&["AI", "Healthcare", "Diagnostics"], &["hospital"]))
            .unwrap();

        assert!(stored.id > 0);
        let fetched = store.get_analysis(stored.id).unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.raw_text, "Some source text.");
        assert_eq!(fetched.topics, vec!["AI", "Healthcare", "Diagnostics"]);
        assert!(store.get_analysis(stored.id + 100).unwrap().is_none());
    }

    #[test]
    fn test_ids_increase() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.insert_analysis(&analysis(&["a", "b", "c"], &[])).unwrap();
        let b = store.insert_analysis(&analysis(&["a", "b", "c"], &[])).unwrap();
        assert!(b.id > a.id);
        assert!(b.created_at >= a.created_at);
        assert_eq!(store.count_analyses().unwrap(), 2);
    }

    #[test]
    fn test_list_most_recent_first() {
        let store = SqliteStore::open_in_memory().unwrap();
        let ids: Vec<i64> = (0..3)
            .map(|_| store.insert_analysis(&analysis(&["x", "y", "z"], &[])).unwrap().id)
            .collect();

        let listed: Vec<i64> = store.list_analyses().unwrap().iter().map(|r| r.id).collect();
        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_search_case_insensitive_topics_and_keywords() {
        let store = SqliteStore::open_in_memory().unwrap();
        let health = store
            .insert_analysis(&analysis(&["Healthcare", "AI", "Medicine"], &["hospital"]))
            .unwrap();
        let kw = store
            .insert_analysis(&analysis(&["Policy", "Budget", "Reform"], &["healthcare"]))
            .unwrap();
        store
            .insert_analysis(&analysis(&["Security", "Breach", "Data"], &["company"]))
            .unwrap();

        let hits: Vec<i64> = store
            .search_analyses(Some("HEALTHCARE"))
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(hits, vec![kw.id, health.id]);

        assert_eq!(store.search_analyses(Some("")).unwrap().len(), 3);
        assert_eq!(store.search_analyses(None).unwrap().len(), 3);
        assert!(store.search_analyses(Some("astronomy")).unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_serialized_form() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_analysis(&analysis(&["alpha", "beta", "gamma"], &[])).unwrap();

        // Spans the separator between two list elements.
        assert_eq!(store.search_analyses(Some("a\",\"b")).unwrap().len(), 1);
    }

    #[test]
    fn test_search_wildcards_are_literal() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_analysis(&analysis(&["growth", "cloud", "revenue"], &[])).unwrap();
        store.insert_analysis(&analysis(&["100% uptime", "cloud", "sla"], &[])).unwrap();

        assert_eq!(store.search_analyses(Some("%")).unwrap().len(), 1);
        assert_eq!(store.search_analyses(Some("_")).unwrap().len(), 0);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sift.db");

        let id = {
            let store = SqliteStore::open(&path).unwrap();
            store.insert_analysis(&analysis(&["a", "b", "c"], &["kw"])).unwrap().id
        };

        let store = SqliteStore::from_location(&DatabaseLocation::File(path.clone())).unwrap();
        assert_eq!(store.db_path(), Some(path.as_path()));
        let record = store.get_analysis(id).unwrap().unwrap();
        assert_eq!(record.keywords, vec!["kw"]);
    }
}
