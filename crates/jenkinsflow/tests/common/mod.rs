use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use jenkinsflow::db;
use jenkinsflow::jobs::{JobStatus, NormalizedJob};

pub async fn setup_db() -> SqlitePool {
    let pool = db::make_memory_pool()
        .await
        .expect("failed to open in-memory sqlite");
    db::run_migrations(&pool).await.expect("migrations failed");
    pool
}

#[allow(dead_code)]
pub fn record(name: &str, status: JobStatus, last_updated: DateTime<Utc>) -> NormalizedJob {
    NormalizedJob {
        name: name.to_string(),
        status,
        last_updated,
    }
}

#[allow(dead_code)]
pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("bad test timestamp")
}
