// src/storage/sqlite.rs
//! SQLite-backed credential store

use std::fs;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::CoreError;
use crate::storage::{Credential, CredentialId, CredentialStore, NewCredential};

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at the configured database path
    pub fn open_default() -> Result<Self, CoreError> {
        let config = crate::config::load();
        Self::open(&config.paths.database)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS credentials (
                id          INTEGER PRIMARY KEY,
                service     TEXT NOT NULL,
                username    TEXT NOT NULL,
                secret      TEXT NOT NULL,
                url         TEXT,
                notes       TEXT,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            "#,
        )?;

        Ok(Self { conn })
    }

    /// Insert a new credential and return its identifier
    pub fn add(&mut self, new: NewCredential) -> Result<CredentialId, CoreError> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO credentials (service, username, secret, url, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![new.service, new.username, new.secret, new.url, new.notes, now, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}

impl CredentialStore for SqliteStore {
    fn list(&self) -> Result<Vec<Credential>, CoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, service, username, secret, url, notes, created_at, updated_at
             FROM credentials ORDER BY service, username",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Credential {
                id: row.get(0)?,
                service: row.get(1)?,
                username: row.get(2)?,
                secret: row.get(3)?,
                url: row.get(4)?,
                notes: row.get(5)?,
                created_at: row.get(6)?,
                updated_at: row.get(7)?,
            })
        })?;

        let mut credentials = Vec::new();
        for row in rows {
            credentials.push(row?);
        }
        Ok(credentials)
    }

    fn delete(&mut self, id: CredentialId) -> Result<(), CoreError> {
        self.conn
            .execute("DELETE FROM credentials WHERE id = ?1", params![id])?;
        Ok(())
    }
}
