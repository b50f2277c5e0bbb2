use anyhow::{Context, Result};
use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use tracing::info;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub cors_max_age_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("APP_HOST", "0.0.0.0")?,
            port: try_load("APP_PORT", "8000")?,
            seed_file: env::var("SEED_FILE").ok().map(PathBuf::from),
            cors_max_age_secs: try_load("CORS_MAX_AGE_SECS", "3600")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: Display,
{
    raw.parse()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw:?}"))
}
