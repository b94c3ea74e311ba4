//! Configuration for reaching the hosted applicants table

use crate::error::ConfigurationError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the project endpoint
pub const ENDPOINT_URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the public anon key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Table receiving applicant rows
pub const DEFAULT_TABLE: &str = "interview_applicants";

/// Resolved settings needed to build a sink client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub endpoint_url: String,
    pub anon_key: String,
    pub table: String,
}

impl SinkConfig {
    /// Build from raw strings, rejecting absent or blank values
    pub fn new(
        endpoint_url: Option<String>,
        anon_key: Option<String>,
        table: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let endpoint_url = non_empty(endpoint_url).ok_or(ConfigurationError::Missing)?;
        let anon_key = non_empty(anon_key).ok_or(ConfigurationError::Missing)?;
        let table = non_empty(table).unwrap_or_else(|| DEFAULT_TABLE.to_string());
        Ok(Self {
            endpoint_url,
            anon_key,
            table,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Where sink settings come from
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    /// Read the settings, failing if anything required is missing
    fn load(&self) -> Result<SinkConfig, ConfigurationError>;
}

/// Optional on-disk settings, used when the environment is incomplete
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Project endpoint, e.g. `https://xyz.supabase.co`
    pub endpoint_url: Option<String>,
    /// Public anon key
    pub anon_key: Option<String>,
    /// Target table override
    pub table: Option<String>,
}

impl FileConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "applicant-intake", "applicant-intake")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FileConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

/// Environment variables first, config file second
#[derive(Debug, Default)]
pub struct EnvConfig;

impl EnvConfig {
    /// Resolve from an arbitrary variable lookup and file settings
    fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        file: FileConfig,
    ) -> Result<SinkConfig, ConfigurationError> {
        let endpoint_url = non_empty(lookup(ENDPOINT_URL_VAR)).or(file.endpoint_url);
        let anon_key = non_empty(lookup(ANON_KEY_VAR)).or(file.anon_key);
        SinkConfig::new(endpoint_url, anon_key, file.table)
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<SinkConfig, ConfigurationError> {
        let file = FileConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config file: {e}");
            FileConfig::default()
        });
        Self::resolve(|name| std::env::var(name).ok(), file)
    }
}
