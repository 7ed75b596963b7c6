use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid SERVER_PORT {0:?}")]
    Port(String),

    #[error("invalid SERVER_HOST {0:?}")]
    Host(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `RUST_LOG`; unset or empty
    /// variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();
        if let Some(host) = var("SERVER_HOST") {
            config.host = host.trim().parse().map_err(|_| ConfigError::Host(host))?;
        }
        if let Some(port) = var("SERVER_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Port(port))?;
        }
        if let Some(filter) = var("RUST_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "3000"),
            ("RUST_LOG", "calc=debug"),
        ]))
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_filter, "calc=debug");
    }

    #[test]
    fn empty_port_keeps_default() {
        let config = Config::from_lookup(lookup(&[("SERVER_PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("SERVER_PORT", "http")])),
            Err(ConfigError::Port("http".into()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("SERVER_HOST", "localhost:1")])),
            Err(ConfigError::Host("localhost:1".into()))
        );
    }
}
