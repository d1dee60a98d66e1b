//! Backend selection by connection URL.

use async_trait::async_trait;
use entities::{DataRecord, DataRecordChanges};

use crate::{DataStore, DataStoreError, DataStoreResult, MySqlDataStore, SqliteDataStore};

/// A SQL-backed data store chosen from the connection URL scheme.
#[derive(Debug, Clone)]
pub enum SqlDataStore {
    /// `mysql://` URLs.
    MySql(MySqlDataStore),
    /// `sqlite:` URLs.
    Sqlite(SqliteDataStore),
}

impl SqlDataStore {
    /// Connects to the backend named by `url` and verifies the connection.
    pub async fn connect(url: &str, max_connections: u32) -> DataStoreResult<Self> {
        let store = if url.starts_with("mysql://") {
            Self::MySql(MySqlDataStore::connect(url, max_connections).await?)
        } else if url.starts_with("sqlite:") {
            Self::Sqlite(SqliteDataStore::connect(url, max_connections).await?)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            return Err(DataStoreError::UnsupportedDatabaseUrl(scheme.to_string()));
        };

        tracing::info!(backend = store.backend_name(), "Connected to database");

        Ok(store)
    }

    /// Returns the backend name for logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        match self {
            Self::MySql(store) => store.close().await,
            Self::Sqlite(store) => store.close().await,
        }
    }
}

#[async_trait]
impl DataStore for SqlDataStore {
    async fn list_records(&self) -> DataStoreResult<Vec<DataRecord>> {
        match self {
            Self::MySql(store) => store.list_records().await,
            Self::Sqlite(store) => store.list_records().await,
        }
    }

    async fn get_record(&self, date: &str) -> DataStoreResult<Option<DataRecord>> {
        match self {
            Self::MySql(store) => store.get_record(date).await,
            Self::Sqlite(store) => store.get_record(date).await,
        }
    }

    async fn create_record(&self, record: &DataRecord) -> DataStoreResult<i64> {
        match self {
            Self::MySql(store) => store.create_record(record).await,
            Self::Sqlite(store) => store.create_record(record).await,
        }
    }

    async fn update_record(
        &self,
        date: &str,
        changes: &DataRecordChanges,
    ) -> DataStoreResult<u64> {
        match self {
            Self::MySql(store) => store.update_record(date, changes).await,
            Self::Sqlite(store) => store.update_record(date, changes).await,
        }
    }

    async fn delete_record(&self, date: &str) -> DataStoreResult<u64> {
        match self {
            Self::MySql(store) => store.delete_record(date).await,
            Self::Sqlite(store) => store.delete_record(date).await,
        }
    }
}
