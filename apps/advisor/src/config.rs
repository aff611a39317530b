use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "advisor.toml";
pub const ENV_PREFIX: &str = "ADVISOR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub session_dir: PathBuf,
    pub download_dir: PathBuf,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            session_dir: std::env::temp_dir().join("crop-advisor-session"),
            download_dir: PathBuf::from("."),
            request_timeout_secs: None,
        }
    }
}

/// Defaults, then `advisor.toml` (or `config_path`), then `ADVISOR__*` variables.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with_prefix(config_path, ENV_PREFIX)
}

pub(crate) fn load_settings_with_prefix(
    config_path: Option<&Path>,
    env_prefix: &str,
) -> anyhow::Result<Settings> {
    let defaults = Settings::default();
    let file = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = Config::builder()
        .set_default("base_url", defaults.base_url)?
        .set_default("session_dir", path_value(&defaults.session_dir))?
        .set_default("download_dir", path_value(&defaults.download_dir))?
        .add_source(File::from(file.as_path()).required(config_path.is_some()))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("failed to load settings from '{}'", file.display()))?;

    config
        .try_deserialize()
        .context("invalid advisor settings")
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
