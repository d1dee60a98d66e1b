use entities::DataRecord;
use sqlx::FromRow;

pub(crate) const SELECT_ALL_SQL: &str = "SELECT date, day, tasks FROM data";
pub(crate) const SELECT_BY_DATE_SQL: &str = "SELECT date, day, tasks FROM data WHERE date = ?";
pub(crate) const INSERT_SQL: &str = "INSERT INTO data (day, tasks) VALUES (?, ?)";
pub(crate) const UPDATE_SQL: &str = "UPDATE data SET day = ?, tasks = ? WHERE date = ?";
pub(crate) const DELETE_SQL: &str = "DELETE FROM data WHERE date = ?";

/// Table definition for the embedded SQLite backend.
pub(crate) const SQLITE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS data (
    date INTEGER PRIMARY KEY AUTOINCREMENT,
    day TEXT NOT NULL,
    tasks TEXT NOT NULL
)
"#;

/// Database row for DataRecord
#[derive(Debug, FromRow)]
pub(crate) struct DataRow {
    pub date: i64,
    pub day: String,
    pub tasks: String,
}

impl From<DataRow> for DataRecord {
    fn from(row: DataRow) -> Self {
        DataRecord {
            date: row.date,
            day: row.day,
            tasks: row.tasks,
        }
    }
}
