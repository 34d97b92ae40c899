use crate::domain::error::ApiError;
use crate::domain::ports::client_store::ClientStore;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// Durable key-value store backing the session credential, theme, and
/// onboarding flag. One table, last writer wins.
pub struct SqliteClientStore {
    conn: Mutex<Connection>,
}

impl SqliteClientStore {
    pub fn open(path: &str) -> Result<Self, ApiError> {
        let conn = Connection::open(path)
            .map_err(|e| ApiError::internal(format!("store open failed: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| ApiError::internal(format!("store WAL failed: {e}")))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .map_err(|e| ApiError::internal(format!("store migration failed: {e}")))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl ClientStore for SqliteClientStore {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ApiError::internal(format!("store read failed: {e}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| ApiError::internal(format!("store write failed: {e}")))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, ApiError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let removed = conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| ApiError::internal(format!("store delete failed: {e}")))?;
        Ok(removed > 0)
    }
}
