use crate::Database;
use crate::models::{ImageRow, LabelRow, StatsRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Images --

    /// First image (in insertion order) with no verified label at all.
    pub fn next_unreviewed_image(&self) -> Result<Option<ImageRow>> {
        self.with_conn(query_next_unreviewed_image)
    }

    pub fn get_image(&self, id: &str) -> Result<Option<ImageRow>> {
        self.with_conn(|conn| query_image_by_id(conn, id))
    }

    pub fn count_images(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM images", [], |r| r.get(0))?;
            Ok(count)
        })
    }

    // -- Labels --

    /// Record a reviewer's label. Correctness is exact equality with the
    /// image's suggested label, and false when the image is unknown.
    pub fn insert_verified_label(&self, image_id: &str, label: &str) -> Result<LabelRow> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let suggested: Option<String> = tx
                .query_row(
                    "SELECT suggested_label FROM images WHERE id = ?1",
                    [image_id],
                    |row| row.get(0),
                )
                .optional()?;
            let was_correct = suggested.as_deref() == Some(label);

            let (id, created_at): (i64, String) = tx.query_row(
                "INSERT INTO verified_labels (image_id, label, was_correct) VALUES (?1, ?2, ?3)
                 RETURNING id, created_at",
                rusqlite::params![image_id, label, was_correct],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            tx.commit()?;

            Ok(LabelRow {
                id,
                image_id: image_id.to_string(),
                label: label.to_string(),
                was_correct,
                created_at,
            })
        })
    }

    pub fn get_label(&self, id: i64) -> Result<Option<LabelRow>> {
        self.with_conn(|conn| query_label_by_id(conn, id))
    }

    /// Delete a label by primary key. Returns false if no such label exists.
    pub fn delete_label(&self, id: i64) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let deleted = conn.execute("DELETE FROM verified_labels WHERE id = ?1", [id])?;
            Ok(deleted == 1)
        })
    }

    // -- Stats --

    pub fn review_stats(&self) -> Result<StatsRow> {
        self.with_conn(|conn| {
            let (total_processed, correct_predictions): (i64, i64) = conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(was_correct), 0) FROM verified_labels",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            Ok(StatsRow {
                total_processed,
                correct_predictions,
                accuracy: compute_accuracy(correct_predictions, total_processed),
            })
        })
    }
}

/// Percentage of correct predictions, 0.0 when nothing has been processed.
pub fn compute_accuracy(correct: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (correct as f64 / total as f64) * 100.0
}

fn query_next_unreviewed_image(conn: &Connection) -> Result<Option<ImageRow>> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.url, i.suggested_label, i.confidence
         FROM images i
         LEFT JOIN verified_labels v ON v.image_id = i.id
         WHERE v.id IS NULL
         ORDER BY i.rowid
         LIMIT 1",
    )?;

    let row = stmt.query_row([], map_image_row).optional()?;
    Ok(row)
}

fn query_image_by_id(conn: &Connection, id: &str) -> Result<Option<ImageRow>> {
    let mut stmt =
        conn.prepare("SELECT id, url, suggested_label, confidence FROM images WHERE id = ?1")?;

    let row = stmt.query_row([id], map_image_row).optional()?;
    Ok(row)
}

fn query_label_by_id(conn: &Connection, id: i64) -> Result<Option<LabelRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, image_id, label, was_correct, created_at FROM verified_labels WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(LabelRow {
                id: row.get(0)?,
                image_id: row.get(1)?,
                label: row.get(2)?,
                was_correct: row.get(3)?,
                created_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn map_image_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ImageRow> {
    Ok(ImageRow {
        id: row.get(0)?,
        url: row.get(1)?,
        suggested_label: row.get(2)?,
        confidence: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(&dir.path().join("reviews.db")).unwrap();
        assert_eq!(db.seed_if_empty().unwrap(), 10);
        (dir, db)
    }

    #[test]
    fn fresh_store_starts_at_first_image_with_zero_stats() {
        let (_dir, db) = seeded_db();

        let stats = db.review_stats().unwrap();
        assert_eq!(stats.total_processed, 0);
        assert_eq!(stats.correct_predictions, 0);
        assert_eq!(stats.accuracy, 0.0);

        let next = db.next_unreviewed_image().unwrap().unwrap();
        assert_eq!(next.id, "img_001");
        assert_eq!(next.url, "https://picsum.photos/id/1/400/300");
        assert_eq!(next.suggested_label, "workstation");
        assert_eq!(next.confidence, 0.95);
    }

    #[test]
    fn seeding_only_happens_once() {
        let (_dir, db) = seeded_db();
        assert_eq!(db.seed_if_empty().unwrap(), 0);
        assert_eq!(db.count_images().unwrap(), 10);
    }

    #[test]
    fn matching_label_is_correct() {
        let (_dir, db) = seeded_db();

        let row = db.insert_verified_label("img_001", "workstation").unwrap();
        assert_eq!(row.id, 1);
        assert!(row.was_correct);
        assert_eq!(db.get_label(1).unwrap(), Some(row));

        let stats = db.review_stats().unwrap();
        assert_eq!((stats.total_processed, stats.correct_predictions), (1, 1));
        assert_eq!(stats.accuracy, 100.0);
    }

    #[test]
    fn correctness_is_exact_string_equality() {
        let (_dir, db) = seeded_db();

        assert!(!db.insert_verified_label("img_002", "Desk").unwrap().was_correct);
        assert!(!db.insert_verified_label("img_002", "desk ").unwrap().was_correct);
        assert!(db.insert_verified_label("img_002", "desk").unwrap().was_correct);
    }

    #[test]
    fn unknown_image_is_recorded_as_incorrect() {
        let (_dir, db) = seeded_db();

        let row = db.insert_verified_label("img_999", "anything").unwrap();
        assert!(!row.was_correct);
        assert_eq!(row.image_id, "img_999");

        // Unknown ids do not mark any real image as reviewed.
        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_001");
        assert_eq!(db.review_stats().unwrap().total_processed, 1);
    }

    #[test]
    fn stats_track_every_submission() {
        let (_dir, db) = seeded_db();

        db.insert_verified_label("img_001", "workstation").unwrap();
        db.insert_verified_label("img_002", "wrong").unwrap();
        let stats = db.review_stats().unwrap();
        assert_eq!(stats.total_processed, 2);
        assert_eq!(stats.correct_predictions, 1);
        assert_eq!(stats.accuracy, 50.0);

        db.insert_verified_label("img_003", "dog").unwrap();
        let stats = db.review_stats().unwrap();
        assert_eq!(stats.total_processed, 3);
        assert_eq!(stats.correct_predictions, 2);
        assert!((stats.accuracy - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn reviewed_images_are_skipped() {
        let (_dir, db) = seeded_db();

        db.insert_verified_label("img_001", "workstation").unwrap();
        db.insert_verified_label("img_003", "cat").unwrap();

        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_002");
        db.insert_verified_label("img_002", "desk").unwrap();
        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_004");
    }

    #[test]
    fn next_is_none_once_everything_is_reviewed() {
        let (_dir, db) = seeded_db();

        for (id, _, suggested, _) in crate::seed::MOCK_IMAGES {
            db.insert_verified_label(id, suggested).unwrap();
        }

        assert!(db.next_unreviewed_image().unwrap().is_none());
        assert_eq!(db.review_stats().unwrap().accuracy, 100.0);
    }

    #[test]
    fn duplicate_submissions_create_separate_rows() {
        let (_dir, db) = seeded_db();

        let first = db.insert_verified_label("img_001", "workstation").unwrap();
        let second = db.insert_verified_label("img_001", "workstation").unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(db.review_stats().unwrap().total_processed, 2);
    }

    #[test]
    fn delete_is_not_repeatable() {
        let (_dir, db) = seeded_db();

        let row = db.insert_verified_label("img_001", "workstation").unwrap();
        assert!(db.delete_label(row.id).unwrap());
        assert!(!db.delete_label(row.id).unwrap());
        assert!(db.get_label(row.id).unwrap().is_none());
    }

    #[test]
    fn deleting_missing_label_changes_nothing() {
        let (_dir, db) = seeded_db();

        db.insert_verified_label("img_001", "workstation").unwrap();
        assert!(!db.delete_label(999).unwrap());
        assert_eq!(db.review_stats().unwrap().total_processed, 1);
    }

    #[test]
    fn deleting_last_label_makes_image_eligible_again() {
        let (_dir, db) = seeded_db();

        let a = db.insert_verified_label("img_001", "workstation").unwrap();
        let b = db.insert_verified_label("img_001", "desk").unwrap();

        assert!(db.delete_label(a.id).unwrap());
        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_002");

        assert!(db.delete_label(b.id).unwrap());
        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_001");
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        let (_dir, db) = seeded_db();

        let row = db.insert_verified_label("img_001", "workstation").unwrap();
        db.delete_label(row.id).unwrap();
        let next = db.insert_verified_label("img_001", "workstation").unwrap();
        assert!(next.id > row.id);
    }

    #[test]
    fn labels_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.db");

        let db = Database::open(&path).unwrap();
        db.seed_if_empty().unwrap();
        db.insert_verified_label("img_001", "workstation").unwrap();
        db.close().unwrap();

        let db = Database::open(&path).unwrap();
        assert_eq!(db.seed_if_empty().unwrap(), 0);
        assert_eq!(db.review_stats().unwrap().total_processed, 1);
        assert_eq!(db.next_unreviewed_image().unwrap().unwrap().id, "img_002");
        assert_eq!(db.get_image("img_001").unwrap().unwrap().suggested_label, "workstation");
    }

    #[test]
    fn accuracy_stays_in_range() {
        assert_eq!(compute_accuracy(0, 0), 0.0);
        assert_eq!(compute_accuracy(0, 4), 0.0);
        assert_eq!(compute_accuracy(4, 4), 100.0);
        assert_eq!(compute_accuracy(1, 4), 25.0);
    }
}
