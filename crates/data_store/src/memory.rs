//! In-memory data store implementation for testing.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use entities::{DataRecord, DataRecordChanges};
use tokio::sync::RwLock;

use crate::{DataStore, DataStoreResult};

#[derive(Debug, Default)]
struct MemoryTable {
    records: BTreeMap<i64, DataRecord>,
    last_id: i64,
}

/// In-memory data store for testing purposes.
///
/// Ids are generated like an autoincrement column: never reused, even
/// after a delete.
#[derive(Debug, Default, Clone)]
pub struct MemoryDataStore {
    table: Arc<RwLock<MemoryTable>>,
}

impl MemoryDataStore {
    /// Creates a new in-memory data store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.records.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Non-numeric keys match nothing, as with an integer column.
fn parse_key(date: &str) -> Option<i64> {
    date.parse().ok()
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn list_records(&self) -> DataStoreResult<Vec<DataRecord>> {
        let table = self.table.read().await;
        Ok(table.records.values().cloned().collect())
    }

    async fn get_record(&self, date: &str) -> DataStoreResult<Option<DataRecord>> {
        let table = self.table.read().await;
        Ok(parse_key(date).and_then(|key| table.records.get(&key).cloned()))
    }

    async fn create_record(&self, record: &DataRecord) -> DataStoreResult<i64> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table
            .records
            .insert(id, record.clone().with_generated_id(id));
        Ok(id)
    }

    async fn update_record(
        &self,
        date: &str,
        changes: &DataRecordChanges,
    ) -> DataStoreResult<u64> {
        let Some(key) = parse_key(date) else {
            return Ok(0);
        };
        let mut table = self.table.write().await;
        let Some(record) = table.records.get_mut(&key) else {
            return Ok(0);
        };
        record.apply(changes.clone());
        Ok(1)
    }

    async fn delete_record(&self, date: &str) -> DataStoreResult<u64> {
        let mut table = self.table.write().await;
        let removed = parse_key(date).and_then(|key| table.records.remove(&key));
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_crud() {
        let store = MemoryDataStore::new();

        // Create
        let id = store
            .create_record(&DataRecord::new(5, "Mon", "write spec"))
            .await
            .unwrap();
        assert_eq!(id, 1);

        // Get
        let fetched = store.get_record("1").await.unwrap().unwrap();
        assert_eq!(fetched, DataRecord::new(1, "Mon", "write spec"));

        // Update
        let affected = store
            .update_record("1", &DataRecordChanges::new("Tue", "review"))
            .await
            .unwrap();
        assert_eq!(affected, 1);
        let fetched = store.get_record("1").await.unwrap().unwrap();
        assert_eq!(fetched.day, "Tue");
        assert_eq!(fetched.tasks, "review");

        // Delete
        assert_eq!(store.delete_record("1").await.unwrap(), 1);
        assert_eq!(store.delete_record("1").await.unwrap(), 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryDataStore::new();

        let first = store
            .create_record(&DataRecord::new(0, "Mon", "a"))
            .await
            .unwrap();
        store.delete_record(&first.to_string()).await.unwrap();

        let second = store
            .create_record(&DataRecord::new(0, "Tue", "b"))
            .await
            .unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_missing_and_invalid_keys() {
        let store = MemoryDataStore::new();
        store
            .create_record(&DataRecord::new(0, "Mon", "a"))
            .await
            .unwrap();

        let changes = DataRecordChanges::new("Tue", "b");
        assert!(store.get_record("999").await.unwrap().is_none());
        assert!(store.get_record("abc").await.unwrap().is_none());
        assert_eq!(store.update_record("abc", &changes).await.unwrap(), 0);
        assert_eq!(store.delete_record("999").await.unwrap(), 0);
        assert_eq!(store.len().await, 1);
    }
}
