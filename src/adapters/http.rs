use crate::domain::model::{HomeWorld, Movie};
use crate::domain::ports::{ConfigProvider, UpstreamProvider};
use crate::utils::error::{GraphError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream provider speaking plain HTTP GET + JSON to each locator.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
}

impl HttpUpstream {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.upstream_timeout(), config.user_agent())
    }

    async fn get_json<T: DeserializeOwned>(&self, locator: &str) -> Result<T> {
        tracing::debug!("Making upstream request to: {}", locator);
        let response = self.client.get(locator).send().await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if !status.is_success() {
            tracing::warn!("Upstream {} returned {}", locator, status);
            return Err(GraphError::UpstreamStatus {
                locator: locator.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl UpstreamProvider for HttpUpstream {
    async fn fetch_movie(&self, locator: &str) -> Result<Movie> {
        self.get_json(locator).await
    }

    async fn fetch_home_world(&self, locator: &str) -> Result<HomeWorld> {
        self.get_json(locator).await
    }
}
