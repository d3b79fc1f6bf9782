use anyhow::Result;
use tracing::info;

use crate::Database;

/// (id, url, suggested_label, confidence)
pub const MOCK_IMAGES: [(&str, &str, &str, f64); 10] = [
    ("img_001", "https://picsum.photos/id/1/400/300", "workstation", 0.95),
    ("img_002", "https://picsum.photos/id/20/400/300", "desk", 0.82),
    ("img_003", "https://picsum.photos/id/237/400/300", "dog", 0.88),
    ("img_004", "https://picsum.photos/id/40/400/300", "nose", 0.76),
    ("img_005", "https://picsum.photos/id/101/400/300", "sky", 0.91),
    ("img_006", "https://picsum.photos/id/111/400/300", "car", 0.65),
    ("img_007", "https://picsum.photos/id/200/400/300", "landscape", 0.79),
    ("img_008", "https://picsum.photos/id/219/400/300", "kitten", 0.33),
    ("img_009", "https://picsum.photos/id/301/400/300", "road", 0.87),
    ("img_010", "https://picsum.photos/id/349/400/300", "city", 0.92),
];

impl Database {
    /// Populate `images` with the mock set if the table is empty.
    /// Returns the number of rows inserted (0 when data already exists).
    pub fn seed_if_empty(&self) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let existing: i64 = tx.query_row("SELECT COUNT(*) FROM images", [], |r| r.get(0))?;
            if existing > 0 {
                info!("Database already contains {} images, skipping seed", existing);
                return Ok(0);
            }

            {
                let mut stmt = tx.prepare(
                    "INSERT INTO images (id, url, suggested_label, confidence) VALUES (?1, ?2, ?3, ?4)",
                )?;
                for (id, url, suggested_label, confidence) in MOCK_IMAGES {
                    stmt.execute(rusqlite::params![id, url, suggested_label, confidence])?;
                }
            }

            tx.commit()?;
            info!("Database populated with {} mock images", MOCK_IMAGES.len());
            Ok(MOCK_IMAGES.len())
        })
    }
}
