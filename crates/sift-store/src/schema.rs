//! Database schema SQL.

/// One row per analysis. `topics` and `keywords` hold JSON arrays as text,
/// which is what `/search` matches against.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS analyses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    raw_text TEXT NOT NULL,
    summary TEXT NOT NULL,
    title VARCHAR(255),
    topics TEXT NOT NULL,
    sentiment VARCHAR(20) NOT NULL,
    keywords TEXT NOT NULL,
    confidence REAL NOT NULL DEFAULT 0.0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_analyses_created_at ON analyses(created_at);
"#;
