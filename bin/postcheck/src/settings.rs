//! Runtime settings: built-in defaults, overridden by `POSTCHECK_*` variables.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Maximum JSON request body, in bytes
    pub json_limit: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("POSTCHECK"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080_i64)?
            .set_default("json_limit", pc_api::DEFAULT_JSON_LIMIT as i64)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("POSTCHECK").source(Some(map))
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let settings = Settings::from_env(env(&[])).unwrap();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.json_limit, 64 * 1024);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_env(env(&[
            ("POSTCHECK_HOST", "0.0.0.0"),
            ("POSTCHECK_PORT", "9090"),
            ("POSTCHECK_JSON_LIMIT", "1024"),
        ]))
        .unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.json_limit, 1024);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Settings::from_env(env(&[("POSTCHECK_PORT", "not-a-port")])).is_err());
    }
}
