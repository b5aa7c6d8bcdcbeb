use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;

use super::model::{NormalizedJob, StoredJob};

#[derive(Clone)]
pub struct JobsRepo {
    pool: SqlitePool,
}

impl JobsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ----------------------------
    // Writes
    // ----------------------------

    /// Insert-or-update the whole batch inside one transaction, in input
    /// order. A row that already exists keeps its name and gets its
    /// status and last_updated overwritten; rows are never deleted here.
    /// Any failing row aborts the batch (transaction dropped uncommitted).
    pub async fn upsert_batch(&self, records: &[NormalizedJob]) -> anyhow::Result<u64> {
        let mut tx = self.pool.begin().await?;

        let mut written = 0u64;
        for rec in records {
            if exists_on(&mut tx, &rec.name).await? {
                sqlx::query(
                    r#"
                    UPDATE jobs
                    SET status = ?1, last_updated = ?2
                    WHERE name = ?3
                    "#,
                )
                .bind(rec.status.as_str())
                .bind(rec.last_updated)
                .bind(&rec.name)
                .execute(&mut *tx)
                .await?;
            } else {
                sqlx::query(
                    r#"
                    INSERT INTO jobs (name, status, last_updated)
                    VALUES (?1, ?2, ?3)
                    "#,
                )
                .bind(&rec.name)
                .bind(rec.status.as_str())
                .bind(rec.last_updated)
                .execute(&mut *tx)
                .await?;
            }
            written += 1;
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Used by `jflowctl reset` only; the sync path never deletes rows.
    pub async fn delete_all(&self) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM jobs").execute(&self.pool).await?;
        Ok(res.rows_affected())
    }

    // ----------------------------
    // Reads
    // ----------------------------

    pub async fn exists(&self, name: &str) -> anyhow::Result<bool> {
        let row: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM jobs WHERE name = ?1 LIMIT 1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    pub async fn get_job(&self, name: &str) -> anyhow::Result<Option<StoredJob>> {
        let job = sqlx::query_as::<_, StoredJob>(
            "SELECT name, status, last_updated FROM jobs WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }

    pub async fn list_jobs(&self) -> anyhow::Result<Vec<StoredJob>> {
        let jobs = sqlx::query_as::<_, StoredJob>(
            "SELECT name, status, last_updated FROM jobs ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn counts_by_status(&self) -> anyhow::Result<Vec<(Option<String>, i64)>> {
        let counts = sqlx::query_as::<_, (Option<String>, i64)>(
            r#"
            SELECT status, COUNT(*)
            FROM jobs
            GROUP BY status
            ORDER BY status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }
}

// Shares the batch's transaction, so an earlier upsert in the same batch
// is visible to the existence check that follows it.
async fn exists_on(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    name: &str,
) -> anyhow::Result<bool> {
    let conn: &mut SqliteConnection = &mut *tx;
    let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM jobs WHERE name = ?1 LIMIT 1")
        .bind(name)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}
