use std::env;

use app_ring::{RingConfig, SpacingMode, config::DEFAULT_SPACE_SIZE};

use crate::core::domain::models::{AppError, RingCommand, command::parse_script};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug)]
pub struct RingMasterConfig {
    pub ring: RingConfig,
    pub nodes: Vec<String>,
    pub data: Vec<String>,
    pub script: Vec<RingCommand>,
    /// Number of generated `key-<i>` items assigned concurrently after build.
    pub sample_keys: usize,
    pub log_filter: String,
}

impl RingMasterConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let space_size = match get("RING_SPACE_SIZE") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("RING_SPACE_SIZE is not a number: {raw}"))
            })?,
            None => DEFAULT_SPACE_SIZE,
        };

        let spacing = match get("RING_SPACING") {
            Some(raw) => raw.parse::<SpacingMode>()?,
            None => SpacingMode::default(),
        };

        let ring = RingConfig::new(space_size, spacing);
        ring.validate()?;

        let nodes = get("RING_NODES")
            .map(|raw| split_list(&raw, ','))
            .ok_or_else(|| AppError::Config("RING_NODES not set".into()))?;

        if nodes.is_empty() {
            return Err(AppError::Config("RING_NODES is empty".into()));
        }

        let data = get("RING_DATA")
            .map(|raw| split_list(&raw, ','))
            .unwrap_or_default();

        let script = match get("RING_SCRIPT") {
            Some(raw) => parse_script(&raw)?,
            None => Vec::new(),
        };

        let sample_keys = match get("RING_SAMPLE_KEYS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::Config(format!("RING_SAMPLE_KEYS is not a number: {raw}"))
            })?,
            None => 0,
        };

        let log_filter = get("RING_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            ring,
            nodes,
            data,
            script,
            sample_keys,
            log_filter,
        })
    }
}

fn split_list(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
