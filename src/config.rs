use crate::services::ScorerKind;
use anyhow::{anyhow, Result};
use log::LevelFilter;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:3043";
const DEFAULT_DATA: &str = "data/samples.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub scorer: ScorerKind,
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = read("CWVSTATS_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e| anyhow!("CWVSTATS_ADDR is not a socket address: {}", e))?;

        let log_level = match read("CWVSTATS_LOG_LEVEL") {
            Some(level) => level
                .parse()
                .map_err(|_| anyhow!("CWVSTATS_LOG_LEVEL '{}' is not a log level", level))?,
            None => LevelFilter::Info,
        };

        let scorer = match read("CWVSTATS_SCORER") {
            Some(kind) => kind
                .parse()
                .map_err(|e| anyhow!("CWVSTATS_SCORER: {}", e))?,
            None => ScorerKind::default(),
        };

        Ok(Self {
            bind_addr,
            data_file: read("CWVSTATS_DATA")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA)),
            log_file: read("CWVSTATS_LOG_FILE").map(PathBuf::from),
            log_level,
            scorer,
        })
    }
}
