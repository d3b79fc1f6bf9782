use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (initial schema)");
        // image_id is an informational link only; no foreign key is enforced so
        // labels for unknown images are still recorded.
        conn.execute_batch(
            "
            BEGIN;

            CREATE TABLE images (
                id              TEXT PRIMARY KEY,
                url             TEXT NOT NULL,
                suggested_label TEXT NOT NULL,
                confidence      REAL NOT NULL
            );

            CREATE TABLE verified_labels (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                image_id    TEXT NOT NULL,
                label       TEXT NOT NULL,
                was_correct INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX idx_verified_labels_image
                ON verified_labels(image_id);

            INSERT INTO schema_version (version) VALUES (1);

            COMMIT;
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
