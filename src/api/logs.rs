use crate::{
    api::ApiError,
    time_log::{self, TimeLogEntry},
    SharedState,
};
use axum::{extract::State, Json};

/// List every persisted entry. An empty table yields `[]`.
pub async fn logs(State(state): State<SharedState>) -> Result<Json<Vec<TimeLogEntry>>, ApiError> {
    // fetch_all reports query and row iteration failures alike
    let rows = time_log::fetch_rows(&state.db)
        .await
        .map_err(ApiError::Retrieve)?;

    let entries = rows
        .iter()
        .map(time_log::scan)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::Scan)?;

    Ok(Json(entries))
}
