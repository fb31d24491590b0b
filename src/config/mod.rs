pub mod seed;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_route_path,
};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3050;
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENT_REQUESTS: usize = 5;
pub const DEFAULT_USER_AGENT: &str = concat!("starwars-graph/", env!("CARGO_PKG_VERSION"));

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "starwars-graph")]
#[command(about = "GraphQL API over an in-memory list of Star Wars characters")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_GRAPHQL_PATH)]
    pub graphql_path: String,

    #[arg(long, help = "JSON file replacing the built-in seed characters")]
    pub seed_file: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub upstream_timeout_secs: u64,

    #[arg(long, default_value_t = DEFAULT_CONCURRENT_REQUESTS)]
    pub concurrent_requests: usize,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "Disable the GraphiQL page on GET requests")]
    pub no_graphiql: bool,

    #[arg(long, short, help = "TOML configuration file; replaces the options above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn graphql_path(&self) -> &str {
        &self.graphql_path
    }

    fn graphiql_enabled(&self) -> bool {
        !self.no_graphiql
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }

    fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("host", config.host())?;
    validate_range("port", config.port(), 1, u16::MAX)?;
    validate_route_path("graphql_path", config.graphql_path())?;
    validate_positive_number("concurrent_requests", config.concurrent_requests(), 1)?;
    validate_range("upstream_timeout_secs", config.upstream_timeout().as_secs(), 1, 300)?;
    validate_non_empty_string("user_agent", config.user_agent())?;

    if let Some(seed_file) = config.seed_file() {
        validate_non_empty_string("seed_file", seed_file)?;
    }

    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_and_path() {
        let config = CliConfig::parse_from(["starwars-graph"]);

        assert_eq!(config.port(), 3050);
        assert_eq!(config.graphql_path(), "/graphql");
        assert!(config.graphiql_enabled());
        assert!(config.seed_file().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_graphql_path() {
        let config = CliConfig::parse_from(["starwars-graph", "--graphql-path", "graphql"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let config = CliConfig::parse_from(["starwars-graph", "--concurrent-requests", "0"]);
        assert!(config.validate().is_err());
    }
}
