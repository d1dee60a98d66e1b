//! MySQL-backed data store.

use async_trait::async_trait;
use entities::{DataRecord, DataRecordChanges};
use sqlx::{mysql::MySqlPoolOptions, Connection, MySql, Pool};

use crate::{
    schema::{DataRow, DELETE_SQL, INSERT_SQL, SELECT_ALL_SQL, SELECT_BY_DATE_SQL, UPDATE_SQL},
    DataStore, DataStoreError, DataStoreResult,
};

/// Data store over a MySQL connection pool.
///
/// Expects an existing `data` table whose `date` column is an
/// `AUTO_INCREMENT` primary key.
#[derive(Debug, Clone)]
pub struct MySqlDataStore {
    pool: Pool<MySql>,
}

impl MySqlDataStore {
    /// Connects to the given `mysql://` URL and verifies the connection.
    pub async fn connect(url: &str, max_connections: u32) -> DataStoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        pool.acquire().await?.ping().await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &Pool<MySql> {
        &self.pool
    }

    /// Closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DataStore for MySqlDataStore {
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

        let id = result.last_insert_id();
        i64::try_from(id).map_err(|_| DataStoreError::GeneratedIdOutOfRange(id))
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
