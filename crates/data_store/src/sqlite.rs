//! SQLite-backed data store.

use async_trait::async_trait;
use entities::{DataRecord, DataRecordChanges};
use sqlx::{sqlite::SqlitePoolOptions, Connection, Pool, Sqlite};

use crate::{
    schema::{
        DataRow, DELETE_SQL, INSERT_SQL, SELECT_ALL_SQL, SELECT_BY_DATE_SQL, SQLITE_TABLE_SQL,
        UPDATE_SQL,
    },
    DataStore, DataStoreResult,
};

/// Data store over a SQLite connection pool.
///
/// The `data` table is created on connect if it does not exist yet.
#[derive(Debug, Clone)]
pub struct SqliteDataStore {
    pool: Pool<Sqlite>,
}

impl SqliteDataStore {
    /// Connects to the given `sqlite:` URL and verifies the connection.
    pub async fn connect(url: &str, max_connections: u32) -> DataStoreResult<Self> {
        // Every connection to an in-memory database sees its own database.
        let max_connections = if url.contains(":memory:") {
            1
        } else {
            max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await?;

        Self::from_pool(pool).await
    }

    /// Opens a private in-memory database.
    pub async fn in_memory() -> DataStoreResult<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    /// Wraps an existing pool, verifying it and creating the table.
    pub async fn from_pool(pool: Pool<Sqlite>) -> DataStoreResult<Self> {
        pool.acquire().await?.ping().await?;

        sqlx::query(SQLITE_TABLE_SQL).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Closes the pool. Later operations fail with a database error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DataStore for SqliteDataStore {
    async fn list_records(&self) -> DataStoreResult<Vec<DataRecord>> {
        let rows: Vec<DataRow> = sqlx::query_as(SELECT_ALL_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DataRecord::from).collect())
    }

    async fn get_record(&self, date: &str) -> DataStoreResult<Option<DataRecord>> {
        let row: Option<DataRow> = sqlx::query_as(SELECT_BY_DATE_SQL)
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(DataRecord::from))
    }

    async fn create_record(&self, record: &DataRecord) -> DataStoreResult<i64> {
        let result = sqlx::query(INSERT_SQL)
            .bind(&record.day)
            .bind(&record.tasks)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_record(
        &self,
        date: &str,
        changes: &DataRecordChanges,
    ) -> DataStoreResult<u64> {
        let result = sqlx::query(UPDATE_SQL)
            .bind(&changes.day)
            .bind(&changes.tasks)
            .bind(date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_record(&self, date: &str) -> DataStoreResult<u64> {
        let result = sqlx::query(DELETE_SQL)
            .bind(date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
