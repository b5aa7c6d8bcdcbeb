#[derive(Clone, Debug)]
pub struct Config {
    pub http_address: String,
    pub http_port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database_path: String,
    pub create_dummy_jobs: bool,
    pub dummy_jobs_file: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let http_address = env_or_fallback("JFLOW_HTTP_ADDRESS", "HTTP_ADDRESS")
            .unwrap_or_else(|| "localhost".to_string());

        let http_port = env_or_fallback("JFLOW_HTTP_PORT", "HTTP_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let username = env_or_fallback("JFLOW_USERNAME", "JENKINS_USERNAME");
        let password = env_or_fallback("JFLOW_PASSWORD", "JENKINS_PASSWORD");

        let database_path = env_or_fallback("JFLOW_DATABASE_PATH", "DATABASE_PATH")
            .unwrap_or_else(|| "jenkinsflow.db".to_string());

        let create_dummy_jobs = env_bool("JFLOW_DUMMY_JOBS").unwrap_or(false);

        let dummy_jobs_file = env_or_fallback("JFLOW_DUMMY_JOBS_FILE", "DUMMY_JOBS_FILE")
            .unwrap_or_else(|| "dummy_jobs.json".to_string());

        let http_timeout_secs = std::env::var("JFLOW_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            http_address,
            http_port,
            username,
            password,
            database_path,
            create_dummy_jobs,
            dummy_jobs_file,
            http_timeout_secs,
        })
    }

    /// Base URL of the Jenkins server this run talks to.
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}

fn env_or_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| std::env::var(fallback).ok().filter(|s| !s.trim().is_empty()))
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
