use serde::Deserialize;

/// One job entry as the server reports it. Jenkins omits `color` for
/// folders and some job types, and the list endpoint can surface entries
/// we cannot use, so both fields stay optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteJob {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobListResponse {
    #[serde(default)]
    pub jobs: Vec<RemoteJob>,
}

/// CSRF token from the crumb issuer, required on POSTs when the server
/// has crumb protection enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct Crumb {
    pub crumb: String,
    #[serde(rename = "crumbRequestField")]
    pub crumb_request_field: String,
}
