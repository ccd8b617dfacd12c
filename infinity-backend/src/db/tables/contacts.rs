//! Contact message database operations

use chrono::Utc;
use rusqlite::{params, Result as SqliteResult, Row};

use crate::models::{ContactMessage, NewContact};
use super::super::Database;

fn contact_from_row(row: &Row<'_>) -> SqliteResult<ContactMessage> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        message: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database {
    /// Insert a contact message and return its new id
    pub fn insert_contact(&self, name: &str, email: &str, message: &str) -> SqliteResult<i64> {
        let conn = self.conn();

        conn.execute(
            "INSERT INTO contacts (name, email, message, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![name, email, message, Utc::now()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a validated submission
    pub fn insert_new_contact(&self, contact: &NewContact) -> SqliteResult<i64> {
        self.insert_contact(&contact.name, &contact.email, &contact.message)
    }

    /// List all contact messages, newest first
    pub fn list_contacts(&self) -> SqliteResult<Vec<ContactMessage>> {
        let conn = self.conn();

        // id breaks ties between rows written within the same timestamp
        let mut stmt = conn.prepare(
            "SELECT id, name, email, message, created_at FROM contacts ORDER BY created_at DESC, id DESC",
        )?;

        let contacts = stmt
            .query_map([], contact_from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(contacts)
    }

    /// Delete a contact message by id. Returns false if no such row existed.
    pub fn delete_contact(&self, id: i64) -> SqliteResult<bool> {
        let conn = self.conn();
        let rows_affected = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }

    /// Count stored contact messages
    pub fn count_contacts(&self) -> SqliteResult<i64> {
        let conn = self.conn();
        conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))
    }
}
