use axum::{Json, extract::State};

use review_types::api::StatsResponse;

use crate::error::ApiResult;
use crate::state::{AppState, with_db};

pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = with_db(&state, |db| db.review_stats()).await?;

    Ok(Json(StatsResponse {
        total_processed: stats.total_processed,
        correct_predictions: stats.correct_predictions,
        accuracy: stats.accuracy,
    }))
}
