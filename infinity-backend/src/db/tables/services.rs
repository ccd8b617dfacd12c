//! Service catalog database operations

use rusqlite::{params, Result as SqliteResult, TransactionBehavior};

use crate::models::{NewService, ServiceOffering};
use super::super::Database;

impl Database {
    /// Count rows in the services table
    pub fn count_services(&self) -> SqliteResult<i64> {
        let conn = self.conn();
        conn.query_row("SELECT COUNT(*) FROM services", [], |row| row.get(0))
    }

    /// List all services in insertion order
    pub fn list_services(&self) -> SqliteResult<Vec<ServiceOffering>> {
        let conn = self.conn();

        let mut stmt = conn.prepare("SELECT id, title, description FROM services ORDER BY id")?;

        let services = stmt
            .query_map([], |row| {
                Ok(ServiceOffering {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(services)
    }

    /// Insert `defaults` only if the services table is empty.
    /// Returns the number of rows inserted (0 when already seeded).
    pub fn seed_services_if_empty(&self, defaults: &[NewService]) -> SqliteResult<usize> {
        let mut conn = self.conn();

        // IMMEDIATE takes the write lock before the count, so two processes
        // opening the same file cannot both seed
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let count: i64 = tx.query_row("SELECT COUNT(*) FROM services", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        {
            let mut stmt = tx.prepare("INSERT INTO services (title, description) VALUES (?1, ?2)")?;
            for service in defaults {
                stmt.execute(params![service.title, service.description])?;
            }
        }

        tx.commit()?;
        Ok(defaults.len())
    }
}
