use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use twelf::{Layer, config};

const CONFIG_FILE: &str = "virtuoso.yaml";
const ENV_PREFIX: &str = "VIRTUOSO_";

const DEFAULT_DB_CONNECTION_STRING: &str = "sqlite://virtuoso.sqlite?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8001";

/// Boolean setting that may arrive as a YAML bool or an env string.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn enabled(&self) -> anyhow::Result<bool> {
        match self {
            Flag::Bool(value) => Ok(*value),
            Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                other => Err(anyhow::anyhow!("Invalid boolean value: {}", other)),
            },
        }
    }
}

// Every key is optional so a missing layer never fails deserialization
#[config]
#[derive(Debug, Default)]
struct RawConfig {
    db_connection_string: Option<String>,
    bind_addr: Option<String>,
    public_url: Option<String>,
    seed_catalog: Option<Flag>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_connection_string: String,
    pub bind_addr: String,
    /// Base URL advertised in the OpenAPI document
    pub public_url: String,
    pub seed_catalog: bool,
}

impl Config {
    /// Loads `virtuoso.yaml` when present, then `VIRTUOSO_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut layers = Vec::new();
        let file = PathBuf::from(CONFIG_FILE);
        if file.exists() {
            layers.push(Layer::Yaml(file));
        }
        layers.push(Layer::Env(Some(ENV_PREFIX.to_string())));

        let raw = RawConfig::with_layers(&layers).with_context(|| "Failed to load configuration")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let seed_catalog = match raw.seed_catalog {
            Some(flag) => flag.enabled().with_context(|| "Invalid seed_catalog")?,
            None => true,
        };
        Ok(Config {
            db_connection_string: raw
                .db_connection_string
                .unwrap_or_else(|| DEFAULT_DB_CONNECTION_STRING.into()),
            bind_addr: raw.bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            public_url: raw
                .public_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_PUBLIC_URL.into()),
            seed_catalog,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.db_connection_string.trim().is_empty() {
            return Err("VIRTUOSO_DB_CONNECTION_STRING is empty".into());
        }
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(format!("Invalid VIRTUOSO_BIND_ADDR: {}", self.bind_addr));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layers_fall_back_to_defaults() {
        let config = Config::from_raw(RawConfig::default()).unwrap();

        assert_eq!(config.db_connection_string, DEFAULT_DB_CONNECTION_STRING);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.public_url, DEFAULT_PUBLIC_URL);
        assert!(config.seed_catalog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn seed_flag_accepts_bools_and_strings() {
        for (flag, expected) in [
            (Flag::Bool(false), false),
            (Flag::Text("false".into()), false),
            (Flag::Text("0".into()), false),
            (Flag::Text(" Yes ".into()), true),
        ] {
            let raw = RawConfig {
                seed_catalog: Some(flag),
                ..Default::default()
            };
            assert_eq!(Config::from_raw(raw).unwrap().seed_catalog, expected);
        }

        let raw = RawConfig {
            seed_catalog: Some(Flag::Text("maybe".into())),
            ..Default::default()
        };
        assert!(Config::from_raw(raw).is_err());
    }

    #[test]
    fn public_url_drops_trailing_slash() {
        let raw = RawConfig {
            public_url: Some("https://violin.example.com/".into()),
            ..Default::default()
        };

        assert_eq!(
            Config::from_raw(raw).unwrap().public_url,
            "https://violin.example.com"
        );
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::from_raw(RawConfig::default()).unwrap();
        config.bind_addr = "localhost".into();
        assert!(config.validate().is_err());

        config.bind_addr = DEFAULT_BIND_ADDR.into();
        config.db_connection_string = "  ".into();
        assert!(config.validate().is_err());
    }
}
