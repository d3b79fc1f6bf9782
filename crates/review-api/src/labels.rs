use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{info, warn};

use review_db::models::LabelRow;
use review_types::api::{LabelRequest, LabelResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, with_db};

/// POST /api/labels — record a reviewer's verdict. Unknown image ids are
/// accepted and stored as incorrect.
pub async fn submit_label(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> ApiResult<impl IntoResponse> {
    let row = with_db(&state, move |db| db.insert_verified_label(&req.image_id, &req.label)).await?;

    info!(
        "Label {} recorded for {} (correct: {})",
        row.id, row.image_id, row.was_correct
    );

    Ok((StatusCode::CREATED, Json(label_response(row))))
}

/// DELETE /api/labels/{label_id}
pub async fn delete_label(
    State(state): State<AppState>,
    Path(label_id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = with_db(&state, move |db| db.delete_label(label_id)).await?;

    if !deleted {
        return Err(ApiError::NotFound("Label not found".into()));
    }

    info!("Label {} deleted", label_id);
    Ok(StatusCode::NO_CONTENT)
}

fn label_response(row: LabelRow) -> LabelResponse {
    let created_at = parse_sqlite_timestamp(&row.created_at).unwrap_or_else(|| {
        warn!("Corrupt created_at '{}' on label {}", row.created_at, row.id);
        DateTime::default()
    });

    LabelResponse {
        id: row.id,
        image_id: row.image_id,
        label: row.label,
        was_correct: row.was_correct,
        created_at,
    }
}

/// SQLite stores `datetime('now')` as "YYYY-MM-DD HH:MM:SS" in UTC with no offset.
fn parse_sqlite_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateTime<Utc>>()
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|ndt| ndt.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_default_timestamps() {
        let ts = parse_sqlite_timestamp("2024-03-01 12:30:45").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T12:30:45+00:00");
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_sqlite_timestamp("yesterday").is_none());
    }
}
