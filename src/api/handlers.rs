use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    epoch_matcher::find_closest,
    oem::find_by_epoch,
    speed::speed_of,
    time::format_epoch,
    tracker_errors::TrackerError,
};

use super::{
    error::ApiError,
    models::{EpochSpeedResponse, EpochsQuery, NowResponse},
    state::AppState,
};

/// Run the blocking part of a request (feed download, store access) off the async executor.
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(format!("request worker failed: {e}")))?
}

fn decode_record(record: &str) -> Result<Value, ApiError> {
    serde_json::from_str(record)
        .map_err(TrackerError::from)
        .map_err(ApiError::from)
}

/// `GET /epochs?limit&offset`
pub async fn list_epochs(
    State(state): State<AppState>,
    query: Result<Query<EpochsQuery>, QueryRejection>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    run_blocking(move || {
        let records = state.store.records()?;
        let offset = query.offset.unwrap_or(0);
        let limit = query.limit.unwrap_or(records.len());

        records
            .iter()
            .skip(offset)
            .take(limit)
            .map(|record| decode_record(record))
            .collect::<Result<Vec<_>, _>>()
            .map(Json)
    })
    .await
}

/// `GET /epochs/{epoch}`
pub async fn get_epoch(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> Result<Json<Value>, ApiError> {
    run_blocking(move || {
        let record = state
            .store
            .get(&epoch)?
            .ok_or_else(|| ApiError::NotFound(format!("Epoch not found: {epoch}")))?;
        decode_record(&record).map(Json)
    })
    .await
}

/// `GET /epochs/{epoch}/speed`
pub async fn epoch_speed(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> Result<Json<EpochSpeedResponse>, ApiError> {
    run_blocking(move || {
        let document = state.feed.fetch()?;
        let entry = find_by_epoch(document.state_vectors(), &epoch)
            .ok_or_else(|| ApiError::NotFound(format!("Epoch not found: {epoch}")))?;
        let speed = speed_of(entry)?;

        Ok(Json(EpochSpeedResponse {
            epoch: entry.epoch.clone(),
            speed,
        }))
    })
    .await
}

/// `GET /now`
pub async fn now(State(state): State<AppState>) -> Result<Json<NowResponse>, ApiError> {
    run_blocking(move || {
        let reference = state.clock.now()?;
        let document = state.feed.fetch()?;
        let closest = find_closest(document.state_vectors(), reference)?
            .ok_or_else(|| ApiError::NotFound("No data available".to_string()))?;
        let speed = speed_of(closest.state_vector)?;

        info!(
            closest = %format_epoch(closest.epoch),
            offset = %closest.offset,
            "closest epoch to now"
        );

        Ok(Json(NowResponse {
            epoch: closest.state_vector.epoch.clone(),
            state_vector: closest.state_vector.clone(),
            speed,
        }))
    })
    .await
}
