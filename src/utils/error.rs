use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Character with id {id} not found")]
    NotFound { id: i32 },

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {locator}")]
    UpstreamStatus { locator: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GraphError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GraphError::NotFound { .. } => ErrorCategory::Request,
            GraphError::Upstream(_) | GraphError::UpstreamStatus { .. } => ErrorCategory::Upstream,
            GraphError::ConfigError { .. } | GraphError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GraphError::IoError(_)
            | GraphError::SerializationError(_)
            | GraphError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Stable machine-readable code, exposed to GraphQL clients under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::NotFound { .. } => "NOT_FOUND",
            GraphError::Upstream(_) | GraphError::UpstreamStatus { .. } => "UPSTREAM_ERROR",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => "Check the requested id against the `people` query",
            ErrorCategory::Upstream => "Check that the upstream API is reachable and retry",
            ErrorCategory::Configuration => "Fix the configuration value and restart the server",
            ErrorCategory::System => "Check file permissions and the bind address",
        }
    }
}

impl ErrorExtensions for GraphError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                GraphError::NotFound { id } => e.set("id", *id),
                GraphError::UpstreamStatus { locator, status } => {
                    e.set("locator", locator.as_str());
                    e.set("status", *status);
                }
                _ => {}
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
