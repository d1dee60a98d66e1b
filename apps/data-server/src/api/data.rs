//! Data record API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use data_store::DataStore;
use entities::{DataRecord, DataRecordChanges};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Data not found";

/// Body returned by successful mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn not_found() -> ServerError {
    ServerError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

/// Binds a JSON body regardless of its declared content type.
fn bind_json<T: DeserializeOwned>(body: &Bytes) -> ServerResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ServerError::InvalidRequest(format!("Failed to bind JSON: {e}")))
}

/// Lists all records.
pub async fn list_data<S: DataStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<DataRecord>>> {
    let records = state.store.list_records().await?;

    tracing::debug!(count = records.len(), "Listed data records");

    Ok(Json(records))
}

/// Gets a record by its date key.
pub async fn get_data<S: DataStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(date): Path<String>,
) -> ServerResult<Json<DataRecord>> {
    let record = state
        .store
        .get_record(&date)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(record))
}

/// Creates a record. The submitted `date` is replaced by the generated id.
pub async fn create_data<S: DataStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<DataRecord>)> {
    let record: DataRecord = bind_json(&body)?;

    let id = state.store.create_record(&record).await?;
    let record = record.with_generated_id(id);

    tracing::info!(date = record.date, "Data record created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Updates `day` and `tasks` of a record.
pub async fn update_data<S: DataStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(date): Path<String>,
    body: Bytes,
) -> ServerResult<Json<MessageResponse>> {
    let changes: DataRecordChanges = bind_json(&body)?;

    let affected = state.store.update_record(&date, &changes).await?;
    if affected == 0 {
        return Err(not_found());
    }

    tracing::info!(date = %date, "Data record updated");

    Ok(Json(MessageResponse::new("Data successfully updated")))
}

/// Deletes a record.
pub async fn delete_data<S: DataStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(date): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    let affected = state.store.delete_record(&date).await?;
    if affected == 0 {
        return Err(not_found());
    }

    tracing::info!(date = %date, "Data record deleted");

    Ok(Json(MessageResponse::new("Data successfully deleted")))
}
