use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use review_types::api::ImageResponse;

use crate::error::ApiResult;
use crate::state::{AppState, with_db};

/// GET /api/images/next — the next image nobody has labelled yet, or 204.
pub async fn next_image(State(state): State<AppState>) -> ApiResult<Response> {
    let image = with_db(&state, |db| db.next_unreviewed_image()).await?;

    Ok(match image {
        Some(row) => Json(ImageResponse {
            id: row.id,
            url: row.url,
            suggested_label: row.suggested_label,
            confidence: row.confidence,
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
