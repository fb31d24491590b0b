pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpUpstream;
pub use crate::app::server::{app, build_from_config, build_with_upstream, serve};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::resolver::CharacterResolver;
pub use crate::core::schema::{build_schema, StarWarsSchema};
pub use crate::core::store::CharacterStore;
pub use crate::utils::error::{GraphError, Result};
