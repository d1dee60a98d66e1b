//! Data store trait definitions.

use async_trait::async_trait;
use entities::{DataRecord, DataRecordChanges};

use crate::DataStoreResult;

/// Trait for `data` table operations.
///
/// Keys are passed through as the raw path segment. Each backend compares
/// them against the integer `date` column the way its database would, so a
/// key that is not a number simply matches nothing.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Lists every record in the store's natural order.
    async fn list_records(&self) -> DataStoreResult<Vec<DataRecord>>;

    /// Gets a record by key.
    async fn get_record(&self, date: &str) -> DataStoreResult<Option<DataRecord>>;

    /// Inserts a record and returns the id the store generated for it.
    ///
    /// The record's own `date` is not written.
    async fn create_record(&self, record: &DataRecord) -> DataStoreResult<i64>;

    /// Updates `day` and `tasks` of the record with the given key.
    ///
    /// Returns the number of rows affected.
    async fn update_record(&self, date: &str, changes: &DataRecordChanges)
        -> DataStoreResult<u64>;

    /// Deletes the record with the given key.
    ///
    /// Returns the number of rows affected.
    async fn delete_record(&self, date: &str) -> DataStoreResult<u64>;
}
