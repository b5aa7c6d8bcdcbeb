use chrono::{DateTime, Utc};

use crate::jenkins::models::RemoteJob;

use super::model::{JobStatus, NormalizedJob};

/// Translate a remote color token. Precedence: exact table match, then
/// the `_anime` in-progress suffix, then verbatim passthrough. The
/// suffix check is case-sensitive and runs after the table, so
/// `blue_anime` is `Building` while `blue` stays `Success`.
pub fn color_to_status(color: Option<&str>) -> JobStatus {
    let Some(color) = color else {
        return JobStatus::Unknown;
    };

    match color {
        "blue" => JobStatus::Success,
        "red" => JobStatus::Failure,
        "notbuilt" => JobStatus::NotBuilt,
        _ if color.ends_with("_anime") => JobStatus::Building,
        other => JobStatus::Other(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub jobs: Vec<NormalizedJob>,
    /// Remote entries dropped for having no usable name.
    pub skipped: usize,
}

/// Turn the raw job list into records ready for the store. Every named
/// entry maps to exactly one record stamped with the shared `now`;
/// nameless entries are skipped and counted, never fatal. Duplicates
/// are kept in input order so the store's last-write-wins applies.
pub fn normalize(raw: &[RemoteJob], now: DateTime<Utc>) -> NormalizedBatch {
    let mut jobs = Vec::with_capacity(raw.len());
    let mut skipped = 0;

    for job in raw {
        let Some(name) = job.name.as_deref().filter(|n| !n.is_empty()) else {
            skipped += 1;
            continue;
        };
        jobs.push(NormalizedJob {
            name: name.to_string(),
            status: color_to_status(job.color.as_deref()),
            last_updated: now,
        });
    }

    NormalizedBatch { jobs, skipped }
}
