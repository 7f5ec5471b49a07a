use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::database::{seed, RosterStore};
use crate::error::{ConfigError, SeedError};
use crate::services::roster_service::CapacityPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity_policy: CapacityPolicy,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "8000")?,
            static_dir: try_load(&lookup, "STATIC_DIR", "static")?,
            capacity_policy: try_load(&lookup, "ACTIVITIES_CAPACITY_POLICY", "unchecked")?,
            seed_path: lookup("ACTIVITIES_SEED_PATH")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the roster store from the seed file when one is configured,
    /// otherwise from the built-in catalog.
    pub fn load_store(&self) -> Result<RosterStore, SeedError> {
        match &self.seed_path {
            Some(path) => {
                info!("Seeding activities from {}", path.display());
                Ok(RosterStore::new(seed::load_seed_file(path)?))
            }
            None => Ok(RosterStore::seeded()),
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })
}
