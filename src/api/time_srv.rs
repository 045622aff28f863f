use crate::{
    api::ApiError,
    clock::{self, TIMEZONE},
    time_log, SharedState,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTime {
    pub current_time: String,
    pub timezone: String,
}

/// Report the current Toronto time and log the instant to `time_log`.
pub async fn current_time(State(state): State<SharedState>) -> Result<Json<CurrentTime>, ApiError> {
    let tz = clock::load_timezone(TIMEZONE).map_err(ApiError::Timezone)?;
    let now = clock::now_in(tz);

    time_log::record(&state.db, &clock::storage_value(&now))
        .await
        .map_err(ApiError::Record)?;

    Ok(Json(CurrentTime {
        current_time: clock::display(&now),
        timezone: TIMEZONE.to_string(),
    }))
}
