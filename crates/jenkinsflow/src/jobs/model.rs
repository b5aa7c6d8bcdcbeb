use chrono::{DateTime, Utc};

/// Canonical build outcome. Colors the translation table does not know
/// stay observable: `Other` carries the server's token verbatim instead
/// of collapsing it into a catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Success,
    Failure,
    NotBuilt,
    Building,
    Unknown,
    Other(String),
}

impl JobStatus {
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "not_built" => Self::NotBuilt,
            "building" => Self::Building,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::NotBuilt => "not_built",
            Self::Building => "building",
            Self::Unknown => "unknown",
            Self::Other(token) => token,
        }
    }
}

/// One remote job after translation, ready to be written. The whole
/// batch of a run shares a single `last_updated` capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedJob {
    pub name: String,
    pub status: JobStatus,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoredJob {
    pub name: String,
    pub status: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}
