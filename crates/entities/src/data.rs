//! Data record entity definitions.

use serde::{Deserialize, Serialize};

/// A row of the `data` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRecord {
    /// Record key. Replaced by the store-generated id on create.
    #[serde(default)]
    pub date: i64,
    /// Day label.
    #[serde(default)]
    pub day: String,
    /// Free-form task description.
    #[serde(default)]
    pub tasks: String,
}

impl DataRecord {
    /// Creates a new record.
    pub fn new(date: i64, day: impl Into<String>, tasks: impl Into<String>) -> Self {
        Self {
            date,
            day: day.into(),
            tasks: tasks.into(),
        }
    }

    /// Returns the record with its key replaced by a store-generated id.
    pub fn with_generated_id(mut self, id: i64) -> Self {
        self.date = id;
        self
    }

    /// Applies an update payload. The key is left untouched.
    pub fn apply(&mut self, changes: DataRecordChanges) {
        self.day = changes.day;
        self.tasks = changes.tasks;
    }
}

/// Fields of a record that can be changed in place.
///
/// Any `date` sent alongside is ignored; the key comes from the request path.
/// Missing fields bind as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRecordChanges {
    /// New day label.
    #[serde(default)]
    pub day: String,
    /// New task description.
    #[serde(default)]
    pub tasks: String,
}

impl DataRecordChanges {
    /// Creates a new update payload.
    pub fn new(day: impl Into<String>, tasks: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            tasks: tasks.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_defaults_when_missing() {
        let record: DataRecord =
            serde_json::from_str(r#"{"day":"Mon","tasks":"write spec"}"#).unwrap();

        assert_eq!(record, DataRecord::new(0, "Mon", "write spec"));
    }

    #[test]
    fn test_missing_fields_bind_empty() {
        let record: DataRecord = serde_json::from_str(r#"{"date":5,"tasks":"x"}"#).unwrap();
        assert_eq!(record, DataRecord::new(5, "", "x"));

        let changes: DataRecordChanges = serde_json::from_str("{}").unwrap();
        assert_eq!(changes, DataRecordChanges::new("", ""));
    }

    #[test]
    fn test_wrong_field_types_are_rejected() {
        assert!(serde_json::from_str::<DataRecord>(r#"{"date":"five"}"#).is_err());
        assert!(serde_json::from_str::<DataRecordChanges>(r#"{"day":1}"#).is_err());
    }

    #[test]
    fn test_generated_id_replaces_date() {
        let record = DataRecord::new(5, "Mon", "write spec").with_generated_id(42);

        assert_eq!(record.date, 42);
        assert_eq!(record.day, "Mon");
    }

    #[test]
    fn test_changes_ignore_date() {
        let changes: DataRecordChanges =
            serde_json::from_str(r#"{"date":7,"day":"Tue","tasks":"review"}"#).unwrap();

        let mut record = DataRecord::new(3, "Mon", "write spec");
        record.apply(changes);

        assert_eq!(record, DataRecord::new(3, "Tue", "review"));
    }
}
