//! # Service Configuration
//!
//! Settings are read from a single YAML file. Every key is optional and falls
//! back to its default.
//!
//! ## YAML Format
//!
//! ```yaml
//! bind_address: "127.0.0.1"
//! port: 3000
//! cors_origin: "http://localhost:8080"
//! history_capacity: 90
//! log_level: "info"
//! ```
//!
//! ## Lookup Order
//!
//! 1. The path in `GROWTH_DIARY_CONFIG`
//! 2. `growth_diary.yaml` in the working directory, if present
//! 3. Built-in defaults
//!
//! `GROWTH_DIARY_PORT` overrides `port` after the file is read.

use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::diary_service::DEFAULT_HISTORY_CAPACITY;

pub const CONFIG_PATH_ENV: &str = "GROWTH_DIARY_CONFIG";
pub const PORT_ENV: &str = "GROWTH_DIARY_PORT";
pub const DEFAULT_CONFIG_FILE: &str = "growth_diary.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthDiaryConfig {
    pub bind_address: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
    /// Maximum number of diary entries kept in memory
    pub history_capacity: usize,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GrowthDiaryConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            cors_origin: "http://localhost:8080".to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl GrowthDiaryConfig {
    /// Load the configuration following the lookup order above
    pub fn load() -> Result<Self> {
        let explicit = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let path = explicit.or_else(|| {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        });

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.with_port_override(env::var(PORT_ENV).ok().as_deref())
    }

    /// Read a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GrowthDiaryConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Replace the port with `port` when one is given
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self> {
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value: {:?}", PORT_ENV, port))?;
            debug!("Port overridden to {}", self.port);
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
