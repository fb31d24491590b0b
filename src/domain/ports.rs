use crate::domain::model::{HomeWorld, Movie};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of the nested resources a character points at.
#[async_trait]
pub trait UpstreamProvider: Send + Sync {
    async fn fetch_movie(&self, locator: &str) -> Result<Movie>;
    async fn fetch_home_world(&self, locator: &str) -> Result<HomeWorld>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn graphql_path(&self) -> &str;
    fn graphiql_enabled(&self) -> bool;
    fn seed_file(&self) -> Option<&str>;
    fn upstream_timeout(&self) -> Duration;
    fn concurrent_requests(&self) -> usize;
    fn user_agent(&self) -> &str;
}
