//! Central module for application-wide configuration settings.
//!
//! Settings come from `CHAINCODE_*` environment variables; every one of them has
//! a default so the peer starts with an empty environment.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CHAINCODE_NAME: &str = "timecard";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub chaincode_name: String,
    pub log_format: LogFormat,
    /// Arguments for a one-off `init` at startup.
    pub init_args: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = parse_or(&lookup, "CHAINCODE_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let log_format = match lookup("CHAINCODE_LOG_FORMAT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "CHAINCODE_LOG_FORMAT",
                value,
            })?,
            None => LogFormat::default(),
        };
        let chaincode_name = lookup("CHAINCODE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHAINCODE_NAME.to_string());
        let init_args = lookup("CHAINCODE_INIT_ARGS")
            .map(|raw| raw.split(',').map(str::to_string).collect());

        Ok(Self {
            listen_addr,
            chaincode_name,
            log_format,
            init_args,
        })
    }
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
