use std::env;
use anyhow::{Context, Result};

/// Which persistence backend the service runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Present exactly when `store_backend` is Spanner.
    pub spanner: Option<SpannerConfig>,
    pub service_port: u16,
    pub service_host: String,
}

#[derive(Debug, Clone)]
pub struct SpannerConfig {
    pub emulator_host: Option<String>,
    pub project: String,
    pub instance: String,
    pub database: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = match env::var("STORE_BACKEND").as_deref() {
            Err(_) | Ok("spanner") => StoreBackend::Spanner,
            Ok("memory") => StoreBackend::Memory,
            Ok(other) => {
                anyhow::bail!("STORE_BACKEND must be 'spanner' or 'memory', got '{other}'")
            }
        };

        let spanner = match store_backend {
            StoreBackend::Spanner => Some(SpannerConfig::from_env()?),
            StoreBackend::Memory => None,
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            spanner,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match &self.spanner {
            Some(spanner) => {
                tracing::info!("  Store backend: spanner");
                tracing::info!("  Spanner emulator: {}",
                    spanner.emulator_host.as_deref().unwrap_or("disabled (using production)"));
                tracing::info!("  Spanner project: {}", spanner.project);
                tracing::info!("  Spanner instance: {}", spanner.instance);
                tracing::info!("  Spanner database: {}", spanner.database);
            }
            None => tracing::info!("  Store backend: memory"),
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

impl SpannerConfig {
    pub fn from_env() -> Result<Self> {
        let emulator_host = env::var("SPANNER_EMULATOR_HOST").ok();

        let project = env::var("SPANNER_PROJECT")
            .context("SPANNER_PROJECT environment variable is required")?;

        let instance = env::var("SPANNER_INSTANCE")
            .context("SPANNER_INSTANCE environment variable is required")?;

        let database = env::var("SPANNER_DATABASE")
            .context("SPANNER_DATABASE environment variable is required")?;

        Ok(SpannerConfig {
            emulator_host,
            project,
            instance,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("STORE_BACKEND");
            env::remove_var("SPANNER_PROJECT");
            env::remove_var("SPANNER_INSTANCE");
            env::remove_var("SPANNER_DATABASE");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    // Environment variables are process-global, so every scenario runs
    // inside this single test to keep the parallel test runner away from
    // them.
    #[test]
    fn from_env_cases() {
        // Memory backend with defaults.
        clear_env_vars();
        unsafe {
            env::set_var("STORE_BACKEND", "memory");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.spanner.is_none());
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");

        // Memory backend with explicit host/port.
        unsafe {
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");

        // Spanner backend requires the SPANNER_* variables.
        clear_env_vars();
        unsafe {
            env::set_var("SPANNER_PROJECT", "test-project");
            env::set_var("SPANNER_INSTANCE", "test-instance");
        }
        // Missing SPANNER_DATABASE
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("SPANNER_DATABASE"));

        unsafe {
            env::set_var("SPANNER_DATABASE", "test-database");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.store_backend, StoreBackend::Spanner);
        let spanner = config.spanner.unwrap();
        assert_eq!(spanner.project, "test-project");
        assert_eq!(spanner.instance, "test-instance");
        assert_eq!(spanner.database, "test-database");

        // Invalid port.
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }
        assert!(Config::from_env().is_err());

        // Unknown backend name.
        clear_env_vars();
        unsafe {
            env::set_var("STORE_BACKEND", "cassandra");
        }
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("STORE_BACKEND"));

        clear_env_vars();
    }
}
