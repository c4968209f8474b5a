use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
    pub log_level: String,
    pub seed_sample_data: bool,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            None => true,
            Some(raw) => Self::parse_flag(&raw).ok_or_else(|| {
                format!("Invalid SEED_SAMPLE_DATA: expected true/false, got '{}'", raw)
            })?,
        };

        Ok(Config {
            server_host,
            server_port,
            app_env,
            log_level,
            seed_sample_data,
        })
    }

    /// Logga la configurazione all'avvio
    pub fn log_summary(&self) {
        info!(
            env = %self.app_env,
            address = %self.bind_address(),
            log_level = %self.log_level,
            "Server configuration loaded"
        );
        if !self.seed_sample_data {
            warn!("Sample data disabled, starting with an empty collection");
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    fn parse_flag(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.app_env, "development");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "8080"),
            ("APP_ENV", "production"),
            ("LOG_LEVEL", "debug"),
            ("SEED_SAMPLE_DATA", "No"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.app_env, "production");
        assert_eq!(config.log_level, "debug");
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("SERVER_PORT", "70000")]).is_err());
        assert!(config_from(&[("SERVER_PORT", "abc")]).is_err());
        assert!(config_from(&[("SEED_SAMPLE_DATA", "maybe")]).is_err());
    }
}
