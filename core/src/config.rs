//! Client configuration from the environment.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ConfigError, TranslateError};
use crate::request::Request;
use crate::transport::UreqTransport;

pub const PROTOCOL_VAR: &str = "TRANSLATE_PROTOCOL";
pub const HOST_VAR: &str = "TRANSLATE_HOST";
pub const PORT_VAR: &str = "TRANSLATE_PORT";
pub const ORIGIN_VAR: &str = "TRANSLATE_ORIGIN";
pub const TIMEOUT_VAR: &str = "TRANSLATE_TIMEOUT_SECS";
pub const LOGGING_VAR: &str = "TRANSLATE_LOGGING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    /// Name the origin identifier is derived from.
    pub origin: String,
    pub timeout: Option<Duration>,
    pub logging: bool,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |var: &'static str| get(var).ok_or(ConfigError::MissingVar { var });

        let port = require(PORT_VAR)?;
        let port = match port.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                return Err(ConfigError::InvalidVar {
                    var: PORT_VAR,
                    value: port,
                })
            }
        };

        let timeout = match get(TIMEOUT_VAR) {
            Some(secs) => match secs.parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    return Err(ConfigError::InvalidVar {
                        var: TIMEOUT_VAR,
                        value: secs,
                    })
                }
            },
            None => None,
        };

        let logging = match get(LOGGING_VAR) {
            Some(flag) => parse_flag(&flag).ok_or(ConfigError::InvalidVar {
                var: LOGGING_VAR,
                value: flag,
            })?,
            None => true,
        };

        Ok(Self {
            protocol: get(PROTOCOL_VAR).unwrap_or_else(|| "http".to_string()),
            host: require(HOST_VAR)?,
            port,
            origin: require(ORIGIN_VAR)?,
            timeout,
            logging,
        })
    }

    /// A `Request` for this configuration using the ureq transport.
    pub fn into_request(self) -> Result<Request, TranslateError> {
        let mut transport = UreqTransport::new();
        if let Some(timeout) = self.timeout {
            transport = transport.with_timeout(timeout);
        }

        let request = Request::new()
            .with_protocol(self.protocol)
            .with_host(self.host)
            .with_port(self.port)
            .with_transport(Arc::new(transport))
            .from_origin(&self.origin)?;

        Ok(if self.logging {
            request.enable_logging()
        } else {
            request.disable_logging()
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
