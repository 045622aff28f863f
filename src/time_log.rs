use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, AnyPool, FromRow};

/// One persisted observation of the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TimeLogEntry {
    pub id: i64,
    pub timestamp: String,
}

/// Append a row. `timestamp` must already be in `clock::TIMESTAMP_FORMAT`.
pub async fn record(db: &AnyPool, timestamp: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO time_log (timestamp) VALUES (?)")
        .bind(timestamp)
        .execute(db)
        .await?;

    Ok(())
}

/// Fetch every row in whatever order the database returns them.
///
/// The timestamp is cast to text since drivers disagree on how DATETIME columns decode.
pub async fn fetch_rows(db: &AnyPool) -> Result<Vec<AnyRow>, sqlx::Error> {
    sqlx::query("SELECT id, CAST(timestamp AS CHAR) AS timestamp FROM time_log")
        .fetch_all(db)
        .await
}

pub fn scan(row: &AnyRow) -> Result<TimeLogEntry, sqlx::Error> {
    TimeLogEntry::from_row(row)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::init::setup::setup_database;
    use std::collections::HashSet;
    use tempfile::TempDir;

    /// Fresh file-backed SQLite database with `time_log` in place.
    pub(crate) async fn test_db() -> (TempDir, AnyPool) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("time.db").display());
        let db = setup_database(&url).await.unwrap();
        (dir, db)
    }

    async fn get_entries(db: &AnyPool) -> Result<Vec<TimeLogEntry>, sqlx::Error> {
        fetch_rows(db).await?.iter().map(scan).collect()
    }

    pub(crate) async fn count(db: &AnyPool) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_log")
            .fetch_one(db)
            .await
            .unwrap();
        row.0
    }

    #[tokio::test]
    async fn test_empty_table() {
        let (_dir, db) = test_db().await;
        assert!(get_entries(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_appends_one_row() {
        let (_dir, db) = test_db().await;

        record(&db, "2024-01-15 09:00:00").await.unwrap();
        assert_eq!(count(&db).await, 1);
        record(&db, "2024-01-15 09:00:01").await.unwrap();
        assert_eq!(count(&db).await, 2);

        let entries = get_entries(&db).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "2024-01-15 09:00:00");
        assert_eq!(entries[1].timestamp, "2024-01-15 09:00:01");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[tokio::test]
    async fn test_ids_unique() {
        let (_dir, db) = test_db().await;

        for _ in 0..10 {
            record(&db, "2024-01-15 09:00:00").await.unwrap();
        }

        let ids: HashSet<i64> = get_entries(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn test_closed_pool() {
        let (_dir, db) = test_db().await;
        db.close().await;

        assert!(record(&db, "2024-01-15 09:00:00").await.is_err());
        assert!(fetch_rows(&db).await.is_err());
    }
}
