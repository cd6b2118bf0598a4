use std::env;

use anyhow::{Context, Result};

use crate::adapters::StoreSettings;

#[derive(Clone)]
pub struct Config {
    pub mongodb_uri: String,
    /// Database name; falls back to the one in the URI
    pub mongodb_database: Option<String>,
    pub mongodb_collection: String,
    pub port: u16,
    /// Sustained requests per second allowed per client IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            mongodb_uri: get("MONGODB_URI").context("MONGODB_URI must be set")?,
            mongodb_database: get("MONGODB_DATABASE").filter(|s| !s.is_empty()),
            mongodb_collection: get("MONGODB_COLLECTION")
                .unwrap_or_else(|| "posts".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            rate_limit_per_second: parse_or(&get, "RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or(&get, "RATE_LIMIT_BURST", 30)?,
        })
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            uri: self.mongodb_uri.clone(),
            database: self.mongodb_database.clone(),
            collection: self.mongodb_collection.clone(),
        }
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", key, raw)),
        None => Ok(default),
    }
}
