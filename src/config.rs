//! Service configuration from environment variables (a `.env` file is loaded first by the binary).

use crate::error::ConfigError;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `DB_SCHEMA`: schema holding the animals table.
    pub db_schema: String,
    /// `DB_MAX_CONNECTIONS`
    pub max_connections: u32,
    /// `BIND_ADDR`
    pub bind_addr: String,
    /// `API_PREFIX`: mount point of the animal routes.
    pub api_prefix: String,
    /// `CORS_ORIGINS`: comma separated; empty allows any origin.
    pub cors_origins: Vec<String>,
    /// `BODY_LIMIT_BYTES`
    pub body_limit_bytes: usize,
    /// `RANDOM_SEED`: fixes the random pick sequence when set.
    pub random_seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_url: "postgres://localhost/animals".into(),
            db_schema: "public".into(),
            max_connections: 5,
            bind_addr: "0.0.0.0:3000".into(),
            api_prefix: "/api/v2".into(),
            cors_origins: Vec::new(),
            body_limit_bytes: 64 * 1024,
            random_seed: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = ServiceConfig::default();

        if let Some(v) = get("DATABASE_URL") {
            cfg.database_url = v;
        }
        if let Some(v) = get("DB_SCHEMA") {
            cfg.db_schema = v;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            cfg.max_connections = parse("DB_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = get("BIND_ADDR") {
            cfg.bind_addr = v;
        }
        if let Some(v) = get("API_PREFIX") {
            if !v.starts_with('/') {
                return Err(ConfigError::Invalid {
                    key: "API_PREFIX",
                    value: v,
                });
            }
            cfg.api_prefix = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("CORS_ORIGINS") {
            cfg.cors_origins = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(v) = get("BODY_LIMIT_BYTES") {
            cfg.body_limit_bytes = parse("BODY_LIMIT_BYTES", &v)?;
        }
        if let Some(v) = get("RANDOM_SEED") {
            cfg.random_seed = Some(parse("RANDOM_SEED", &v)?);
        }
        Ok(cfg)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
