pub mod client;
pub mod models;

pub use client::JenkinsClient;
pub use models::{Crumb, JobListResponse, RemoteJob};
