use anyhow::{bail, Context};
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

use super::models::{Crumb, JobListResponse, RemoteJob};

pub struct JenkinsClient {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl JenkinsClient {
    pub fn new(
        base_url: &str,
        username: Option<String>,
        password: Option<String>,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("jenkinsflow/0.1")
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.username {
            Some(user) => req.basic_auth(user, self.password.as_deref()),
            None => req,
        }
    }

    /// Cheap handshake before doing any real work. Separates "server not
    /// there" from "server rejected the credentials" in the error message.
    pub async fn verify_connection(&self) -> anyhow::Result<()> {
        let url = format!("{}/api/json?tree=jobs[name]", self.base_url);
        let resp = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("jenkins unreachable at {}", self.base_url))?;
        check_status(resp.status())
    }

    pub async fn get_jobs(&self) -> anyhow::Result<Vec<RemoteJob>> {
        let url = format!("{}/api/json?tree=jobs[name,color]", self.base_url);
        let resp = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("jenkins unreachable at {}", self.base_url))?;
        check_status(resp.status())?;

        let body: JobListResponse = resp
            .json()
            .await
            .context("failed to parse jenkins job list")?;
        Ok(body.jobs)
    }

    pub async fn get_job(&self, name: &str) -> anyhow::Result<Option<RemoteJob>> {
        let url = format!(
            "{}/job/{}/api/json?tree=name,color",
            self.base_url,
            urlencoding::encode(name)
        );
        let resp = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("jenkins unreachable at {}", self.base_url))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(resp.status())?;

        let job: RemoteJob = resp
            .json()
            .await
            .with_context(|| format!("failed to parse job '{name}'"))?;
        Ok(Some(job))
    }

    pub async fn create_job(&self, name: &str, config_xml: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/createItem?name={}",
            self.base_url,
            urlencoding::encode(name)
        );
        let req = self
            .with_auth(self.client.post(&url))
            .header("Content-Type", "text/xml")
            .body(config_xml.to_string());
        let resp = self
            .attach_crumb(req)
            .await?
            .send()
            .await
            .with_context(|| format!("failed to create job '{name}'"))?;
        check_status(resp.status())
    }

    pub async fn build_job(&self, name: &str) -> anyhow::Result<()> {
        let url = format!("{}/job/{}/build", self.base_url, urlencoding::encode(name));
        let req = self.with_auth(self.client.post(&url));
        let resp = self
            .attach_crumb(req)
            .await?
            .send()
            .await
            .with_context(|| format!("failed to trigger build of '{name}'"))?;
        check_status(resp.status())
    }

    /// POSTs need a CSRF crumb unless the server has crumb protection
    /// disabled, in which case the issuer 404s and we go without.
    async fn attach_crumb(&self, req: RequestBuilder) -> anyhow::Result<RequestBuilder> {
        let url = format!("{}/crumbIssuer/api/json", self.base_url);
        let resp = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .with_context(|| format!("jenkins unreachable at {}", self.base_url))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(req);
        }
        check_status(resp.status())?;

        let crumb: Crumb = resp.json().await.context("failed to parse csrf crumb")?;
        Ok(req.header(crumb.crumb_request_field.as_str(), crumb.crumb.as_str()))
    }
}

fn check_status(status: StatusCode) -> anyhow::Result<()> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            bail!("jenkins rejected the credentials ({status})")
        }
        s if s.is_success() => Ok(()),
        s => bail!("jenkins returned unexpected status {s}"),
    }
}
