//! Storage selection and PostgreSQL pool sizing.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool the service will open against the barangay database.
pub const MAX_POOL_SIZE: u32 = 100;

/// Where the catalog and conversation log live.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local stores; data is lost on restart.
    Memory,
}

/// `BARANGUIDE__DATABASE__*` settings. Only `backend` is read when the
/// in-memory stores are selected.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// `postgres://` or `postgresql://` URL of the services, FAQs and
    /// messages tables.
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    /// How long a chat request waits for a pooled connection before the
    /// catalog read degrades to "data unavailable".
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn uses_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.uses_postgres() {
            return Ok(());
        }
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        let scheme_ok = ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme));
        if !scheme_ok {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgres(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_small_postgres_pool() {
        let config = DatabaseConfig::default();
        assert!(config.uses_postgres());
        assert_eq!((config.min_connections, config.max_connections), (1, 10));
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert_eq!(config.idle_timeout(), Duration::from_secs(600));
        assert_eq!(config.max_lifetime(), Duration::from_secs(1800));
    }

    #[test]
    fn postgres_without_url_is_rejected() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("DATABASE__URL"))
        );
    }

    #[test]
    fn memory_backend_ignores_pool_settings() {
        let config = DatabaseConfig {
            backend: StorageBackend::Memory,
            url: "mysql://ignored".to_string(),
            max_connections: MAX_POOL_SIZE + 1,
            ..Default::default()
        };
        assert!(!config.uses_postgres());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_postgres_url_is_rejected() {
        assert_eq!(
            postgres("mysql://localhost/barangay").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
        assert!(postgres("postgres://localhost/barangay").validate().is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let inverted = DatabaseConfig {
            min_connections: 8,
            max_connections: 4,
            ..postgres("postgresql://localhost/barangay")
        };
        assert_eq!(inverted.validate(), Err(ValidationError::InvalidPoolSize));

        let oversized = DatabaseConfig {
            max_connections: MAX_POOL_SIZE + 50,
            ..postgres("postgresql://localhost/barangay")
        };
        assert_eq!(oversized.validate(), Err(ValidationError::PoolSizeTooLarge));
    }

    #[test]
    fn hall_database_url_passes() {
        let config = postgres("postgresql://baranguide:secret@db:5432/barangay");
        assert!(config.validate().is_ok());
    }
}
