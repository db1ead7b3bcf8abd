//! Process configuration from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there behave like
//! real environment variables. Leptos site options (site root, asset paths)
//! come from `[package.metadata.leptos]` and are read in `routes`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Read `PORT` (default 3000).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    pub fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_owned(),
                source,
            })?,
        };
        Ok(Self { port })
    }

    /// Listen on all interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
