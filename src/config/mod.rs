//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BARANGUIDE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use baranguide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod chat;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use chat::ChatConfig;
pub use database::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Time reserved inside one request for the catalog and history reads.
pub const REQUEST_HEADROOM_SECS: u64 = 5;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Chat pipeline limits
    #[serde(default)]
    pub chat: ChatConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BARANGUIDE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BARANGUIDE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BARANGUIDE__DATABASE__URL=...` -> `database.url = ...`
    /// - `BARANGUIDE__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BARANGUIDE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        self.chat.validate()?;
        self.validate_timeouts()?;
        Ok(())
    }

    /// Generation has to finish inside the request timeout, with
    /// `REQUEST_HEADROOM_SECS` left for the catalog and history reads.
    fn validate_timeouts(&self) -> Result<(), ValidationError> {
        let ai_secs = self.ai.timeout_secs;
        let request_secs = self.server.request_timeout_secs;
        if ai_secs.saturating_add(REQUEST_HEADROOM_SECS) > request_secs {
            return Err(ValidationError::GenerationOutlastsRequest {
                ai_secs,
                request_secs,
                headroom_secs: REQUEST_HEADROOM_SECS,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BARANGUIDE__DATABASE__URL",
        "BARANGUIDE__DATABASE__BACKEND",
        "BARANGUIDE__AI__GEMINI_API_KEY",
        "BARANGUIDE__SERVER__PORT",
        "BARANGUIDE__SERVER__ENVIRONMENT",
        "BARANGUIDE__CHAT__HISTORY_LIMIT",
    ];

    fn set_minimal_env() {
        env::set_var("BARANGUIDE__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("BARANGUIDE__AI__GEMINI_API_KEY", "AIza-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(config.ai.has_gemini());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.chat.history_limit, 5);
        assert_eq!(config.ai.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BARANGUIDE__SERVER__PORT", "3000");
        env::set_var("BARANGUIDE__SERVER__ENVIRONMENT", "production");
        env::set_var("BARANGUIDE__CHAT__HISTORY_LIMIT", "8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.chat.history_limit, 8);
    }

    #[test]
    fn test_memory_backend_without_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BARANGUIDE__DATABASE__BACKEND", "memory");
        env::set_var("BARANGUIDE__AI__GEMINI_API_KEY", "AIza-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    fn memory_config(request_timeout_secs: u64, ai_timeout_secs: u64) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                request_timeout_secs,
                ..Default::default()
            },
            database: DatabaseConfig {
                backend: StorageBackend::Memory,
                ..Default::default()
            },
            ai: AiConfig {
                gemini_api_key: Some(secrecy::Secret::new("AIza-test".to_string())),
                timeout_secs: ai_timeout_secs,
                ..Default::default()
            },
            chat: ChatConfig::default(),
        }
    }

    #[test]
    fn test_default_timeouts_leave_headroom() {
        assert!(memory_config(30, 20).validate().is_ok());
        assert!(memory_config(25, 20).validate().is_ok());
    }

    #[test]
    fn test_ai_timeout_longer_than_request_fails_validation() {
        assert_eq!(
            memory_config(5, 60).validate(),
            Err(ValidationError::GenerationOutlastsRequest {
                ai_secs: 60,
                request_secs: 5,
                headroom_secs: REQUEST_HEADROOM_SECS,
            })
        );
    }

    #[test]
    fn test_ai_timeout_without_headroom_fails_validation() {
        assert!(matches!(
            memory_config(22, 20).validate(),
            Err(ValidationError::GenerationOutlastsRequest { .. })
        ));
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BARANGUIDE__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AI__GEMINI_API_KEY"))
        );
    }
}
