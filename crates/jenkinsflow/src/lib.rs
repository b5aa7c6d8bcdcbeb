pub mod config;
pub mod db;
pub mod jenkins;
pub mod jobs;
