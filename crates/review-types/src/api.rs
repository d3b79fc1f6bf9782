use serde::{Deserialize, Serialize};

// -- Images --

/// An image awaiting review, as served to the reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: String,
    pub url: String,
    pub suggested_label: String,
    pub confidence: f64,
}

// -- Labels --

#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    pub image_id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelResponse {
    pub id: i64,
    pub image_id: String,
    pub label: String,
    pub was_correct: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// -- Stats --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_processed: i64,
    pub correct_predictions: i64,
    /// Percentage in `0.0..=100.0`, exactly `0.0` when nothing has been reviewed.
    pub accuracy: f64,
}

// -- Misc --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub images: i64,
}

/// Body returned with every non-2xx response produced by the API itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
