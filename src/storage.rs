use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

use crate::api::Opportunity;
use crate::model::FilterState;

/// Key holding the lead list filter/sort preferences
pub const FILTERS_KEY: &str = "leads-filters";
/// Key holding the accumulated opportunity collection
pub const OPPORTUNITIES_KEY: &str = "opportunities";

/// Local key-value store; values are JSON text
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open the store at `path`, or in the platform data directory
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let db_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open store {}", db_path.display()))?;

        let mut store = KvStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let mut store = KvStore {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("sellertui").join("storage.db"),
            None => {
                let mut path = std::env::temp_dir();
                path.push("sellertui-storage");
                path.join("storage.db")
            }
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;

        match stmt.query_row(params![key], |row| row.get(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;

        Ok(())
    }

    /// Read and decode a value; a missing key is `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };

        let value = serde_json::from_str(&raw)
            .with_context(|| format!("Stored value for '{}' is malformed", key))?;
        Ok(Some(value))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }

    /// Filter preferences, falling back to defaults when absent or unreadable
    pub fn load_filters(&self) -> FilterState {
        match self.get::<FilterState>(FILTERS_KEY) {
            Ok(Some(filters)) => filters,
            Ok(None) => FilterState::default(),
            Err(e) => {
                tracing::warn!("Ignoring stored filters: {:#}", e);
                FilterState::default()
            }
        }
    }

    pub fn save_filters(&self, filters: &FilterState) -> Result<()> {
        self.set(FILTERS_KEY, filters)
    }

    /// Opportunity collection, empty when absent or unreadable
    pub fn load_opportunities(&self) -> Vec<Opportunity> {
        match self.get::<Vec<Opportunity>>(OPPORTUNITIES_KEY) {
            Ok(Some(list)) => list,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Ignoring stored opportunities: {:#}", e);
                Vec::new()
            }
        }
    }

    pub fn save_opportunities(&self, opportunities: &[Opportunity]) -> Result<()> {
        self.set(OPPORTUNITIES_KEY, &opportunities)
    }
}
