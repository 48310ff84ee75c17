//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid server host")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("AI base URL must use http or https")]
    InvalidAiBaseUrl,

    #[error("AI temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("AI generation timeout must be between 1 and 120 seconds")]
    InvalidAiTimeout,

    #[error("Chat history limit must be at most 50 turns")]
    InvalidHistoryLimit,

    #[error("Chat context budget value must be positive: {0}")]
    InvalidContextBudget(&'static str),

    #[error("Conversation logger queue capacity must be at least 1")]
    InvalidQueueCapacity,

    #[error(
        "AI timeout ({ai_secs}s) must leave {headroom_secs}s under the request timeout ({request_secs}s)"
    )]
    GenerationOutlastsRequest {
        ai_secs: u64,
        request_secs: u64,
        headroom_secs: u64,
    },
}
