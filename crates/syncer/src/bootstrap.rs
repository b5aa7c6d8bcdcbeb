use anyhow::Context;
use serde::Deserialize;

use jenkinsflow::jenkins::JenkinsClient;

#[derive(Debug, Deserialize)]
pub struct DummyJob {
    pub name: String,
    pub config: String,
    #[serde(default)]
    pub build: bool,
}

/// Seed the server with demonstration jobs. Jobs that already exist are
/// left alone; a `build` entry triggers a run either way.
pub async fn create_dummy_jobs(client: &JenkinsClient, path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dummy jobs file {path}"))?;
    let dummy_jobs: Vec<DummyJob> =
        serde_json::from_str(&raw).with_context(|| format!("malformed dummy jobs file {path}"))?;

    for job in &dummy_jobs {
        if client.get_job(&job.name).await?.is_none() {
            client.create_job(&job.name, &job.config).await?;
            println!("+ created dummy job {}", job.name);
        }
        if job.build {
            client.build_job(&job.name).await?;
            println!("+ triggered build of {}", job.name);
        }
    }

    Ok(())
}
