use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::query::{StatusFilter, TaskQuery};
use crate::store::Latency;

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub latency: Latency,
    pub seed_dir: Option<PathBuf>,
    pub enforce_category: bool,
    pub query: TaskQuery,
    pub category: Option<i64>,
}

impl Config {
    pub fn new_from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let latency = match lookup("TASKBOARD_LATENCY") {
            Some(value) => parse_latency(&value)?,
            None => Latency::default(),
        };

        let seed_dir = lookup("TASKBOARD_SEED_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let enforce_category = match lookup("TASKBOARD_ENFORCE_CATEGORY") {
            Some(value) => parse_bool("TASKBOARD_ENFORCE_CATEGORY", &value)?,
            None => false,
        };

        let status = match lookup("TASKBOARD_FILTER") {
            Some(value) => value.parse::<StatusFilter>()?,
            None => StatusFilter::All,
        };
        let search = lookup("TASKBOARD_SEARCH").unwrap_or_default();

        let category = match lookup("TASKBOARD_CATEGORY") {
            Some(value) if !value.trim().is_empty() => Some(value.trim().parse::<i64>().map_err(|_| {
                AppError::Config(format!("TASKBOARD_CATEGORY must be a category id, got `{value}`"))
            })?),
            _ => None,
        };

        Ok(Self {
            latency,
            seed_dir,
            enforce_category,
            query: TaskQuery::new(search, status),
            category,
        })
    }
}

fn parse_latency(value: &str) -> Result<Latency, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "simulated" => Ok(Latency::Simulated),
        "off" | "none" | "0" => Ok(Latency::Off),
        ms => ms
            .parse::<u64>()
            .map(|ms| Latency::Fixed(Duration::from_millis(ms)))
            .map_err(|_| AppError::Config(format!("TASKBOARD_LATENCY must be `simulated`, `off` or milliseconds, got `{value}`"))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(AppError::Config(format!("{key} must be true or false, got `{value}`"))),
    }
}
