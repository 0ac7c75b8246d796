//! # Server Configuration
//!
//! Process-level settings read from the environment. Widget settings live
//! in `booking_config.yaml` inside the data directory and are loaded by the
//! storage layer.
//!
//! | variable | default |
//! |---|---|
//! | `RESORT_BIND_ADDR` | `127.0.0.1:3000` |
//! | `RESORT_DATA_DIR` | `data` |
//! | `RESORT_FRONTEND_DIST` | `frontend/dist` |
//! | `RESORT_ALLOWED_ORIGIN` | `http://localhost:8080` |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "RESORT_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "RESORT_DATA_DIR";
pub const FRONTEND_DIST_VAR: &str = "RESORT_FRONTEND_DIST";
pub const ALLOWED_ORIGIN_VAR: &str = "RESORT_ALLOWED_ORIGIN";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding `availability-data.json` and `booking_config.yaml`
    pub data_directory: PathBuf,
    /// Built frontend served for every non-API path
    pub frontend_dist: PathBuf,
    /// Origin allowed by CORS (the trunk dev server by default)
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_directory: PathBuf::from("data"),
            frontend_dist: PathBuf::from("frontend/dist"),
            allowed_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", BIND_ADDR_VAR, addr))?;
        }
        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_directory = PathBuf::from(dir);
        }
        if let Some(dist) = lookup(FRONTEND_DIST_VAR) {
            config.frontend_dist = PathBuf::from(dist);
        }
        if let Some(origin) = lookup(ALLOWED_ORIGIN_VAR) {
            config.allowed_origin = origin;
        }

        Ok(config)
    }
}
