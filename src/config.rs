use crate::error::{FormlineError, Result};

/// Runtime configuration for the deployment repository.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_ms: u64,
    pub default_page_size: i64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/formline_development".to_string(),
            max_connections: 10,
            acquire_timeout_ms: 5000,
            default_page_size: 50,
        }
    }
}

impl RepositoryConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset. Set values that fail to parse are
    /// configuration errors rather than silent fallbacks.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(max_connections) = std::env::var("FORMLINE_MAX_CONNECTIONS") {
            config.max_connections = max_connections.parse().map_err(|e| {
                FormlineError::Configuration {
                    message: format!("Invalid max_connections: {e}"),
                }
            })?;
        }

        if let Ok(acquire_timeout) = std::env::var("FORMLINE_ACQUIRE_TIMEOUT_MS") {
            config.acquire_timeout_ms = acquire_timeout.parse().map_err(|e| {
                FormlineError::Configuration {
                    message: format!("Invalid acquire_timeout_ms: {e}"),
                }
            })?;
        }

        if let Ok(page_size) = std::env::var("FORMLINE_DEFAULT_PAGE_SIZE") {
            let parsed: i64 = page_size.parse().map_err(|e| FormlineError::Configuration {
                message: format!("Invalid default_page_size: {e}"),
            })?;
            if parsed <= 0 {
                return Err(FormlineError::Configuration {
                    message: format!("default_page_size must be positive, got {parsed}"),
                });
            }
            config.default_page_size = parsed;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = RepositoryConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_ms, 5000);
        assert_eq!(config.default_page_size, 50);
        assert!(config.database_url.starts_with("postgresql://"));
    }

    #[test]
    fn unparsable_pool_size_is_a_configuration_error() {
        std::env::set_var("FORMLINE_MAX_CONNECTIONS", "plenty");
        let error = RepositoryConfig::from_env().unwrap_err();
        std::env::remove_var("FORMLINE_MAX_CONNECTIONS");
        assert!(matches!(error, FormlineError::Configuration { .. }));
    }

    #[test]
    fn non_positive_page_size_is_rejected() {
        std::env::set_var("FORMLINE_DEFAULT_PAGE_SIZE", "0");
        let error = RepositoryConfig::from_env().unwrap_err();
        std::env::remove_var("FORMLINE_DEFAULT_PAGE_SIZE");
        assert!(matches!(error, FormlineError::Configuration { .. }));
    }
}
