//! Whole-value key-value primitives.
//!
//! # Responsibility
//! - Read and replace single values in `kv_store`.
//!
//! # Invariants
//! - `kv_put` fully overwrites any previous value under the key.
//! - Callers see `None` for a key that has never been written; an empty
//!   string is a present value, not a missing one.

use rusqlite::Connection;

/// Reads the raw value stored under `key`.
pub fn kv_get(conn: &Connection, key: &str) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get(0)?));
    }
    Ok(None)
}

/// Writes `value` under `key`, replacing any previous value.
pub fn kv_put(conn: &Connection, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
        [key, value],
    )?;
    Ok(())
}
