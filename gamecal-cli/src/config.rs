use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

/// Catalog API credentials, supplied via the environment.
pub struct Credentials {
    pub client_id: String,
    pub access_token: String,
}

impl Credentials {
    /// Read CLIENT_ID and ACCESS_TOKEN from the environment.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("CLIENT_ID").context("CLIENT_ID is not set")?;
        let access_token = std::env::var("ACCESS_TOKEN").context("ACCESS_TOKEN is not set")?;

        Ok(Credentials {
            client_id,
            access_token,
        })
    }
}

static DEFAULT_OUTPUT_PATH: &str = "docs/igdb_releases.ics";
static DEFAULT_API_URL: &str = "https://api.igdb.com/v4";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_calendar_name() -> String {
    "Game Releases".to_string()
}

fn default_days_past() -> i64 {
    30
}

fn default_days_future() -> i64 {
    365
}

fn default_min_hypes() -> u32 {
    5
}

/// Global configuration at ~/.config/gamecal/config.toml
///
/// Credentials are not stored in the file; they come from the environment
/// instead.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_output_path")]
    pub output: PathBuf,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    /// How far back releases are included, in days
    #[serde(default = "default_days_past")]
    pub days_past: i64,

    /// How far ahead releases are included, in days
    #[serde(default = "default_days_future")]
    pub days_future: i64,

    /// Minimum hype count for a release to qualify
    #[serde(default = "default_min_hypes")]
    pub min_hypes: u32,
}

impl GlobalConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("gamecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Configured output path with ~ expanded.
    pub fn output_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}
