//! Database row types — these map directly to SQLite rows.
//! Distinct from review-types API models to keep the DB layer independent.

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRow {
    pub id: String,
    pub url: String,
    pub suggested_label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub id: i64,
    pub image_id: String,
    pub label: String,
    pub was_correct: bool,
    /// SQLite `datetime('now')` text, UTC without offset.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub total_processed: i64,
    pub correct_predictions: i64,
    pub accuracy: f64,
}
