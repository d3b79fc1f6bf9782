use axum::{Json, extract::State};

use review_types::api::HealthResponse;

use crate::error::ApiResult;
use crate::state::{AppState, with_db};

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let images = with_db(&state, |db| db.count_images()).await?;

    Ok(Json(HealthResponse {
        status: "ok".into(),
        images,
    }))
}
