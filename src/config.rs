use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DAILY_RATES_URL;

/// CLI configuration, read from `config.toml` next to the manifest.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Feed endpoint. Overridable to point at a mirror or a local stub.
    pub base_url: String,
    /// Default allow-list of short codes; empty means "all currencies".
    pub currencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DAILY_RATES_URL.to_string(),
            currencies: Vec::new(),
        }
    }
}

fn get_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("config.toml");
    path
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

pub fn load_config() -> anyhow::Result<Config> {
    read_config(&get_config_path())
}
