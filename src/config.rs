use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::gemini::GeminiConfig;

// Constants
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const ENV_PREFIX: &str = "GENIE";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
  #[serde(default)]
  pub api_key:  Option<String>,
  pub model:    String,
  pub base_url: String
}

/// `~/.config/git-genie/config.ini`, or nothing when there is no home directory.
pub fn config_file() -> Option<PathBuf> {
  home::home_dir().map(|home| home.join(".config/git-genie/config.ini"))
}

/// The API key from `GOOGLE_API_KEY`; only an unset variable counts as missing.
pub fn api_key_from_env() -> Option<String> {
  env::var(API_KEY_ENV).ok()
}

impl Settings {
  /// Reads the user config file and `GENIE_*` variables around an already known API key.
  pub fn load(api_key: String) -> Result<Self> {
    Self::load_with(config_file().as_deref(), Some(api_key))
  }

  /// Same as [`Settings::load`] with an explicit config file.
  ///
  /// A missing file is skipped. A file that exists but does not parse is an error.
  pub fn load_with(file: Option<&Path>, api_key: Option<String>) -> Result<Self> {
    let mut builder = Config::builder()
      .set_default("model", DEFAULT_MODEL)?
      .set_default("base_url", DEFAULT_BASE_URL)?;

    if let Some(file) = file {
      builder = builder.add_source(File::new(file.to_string_lossy().as_ref(), FileFormat::Ini).required(false));
    }

    let config = builder
      .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
      .build()
      .context("Failed to read git-genie configuration")?;

    let mut settings: Settings = config
      .try_deserialize()
      .context("Failed to deserialize git-genie configuration")?;

    // The key only ever comes from GOOGLE_API_KEY
    settings.api_key = api_key;
    Ok(settings)
  }

  /// The explicit client configuration, or `None` when no API key was supplied.
  pub fn credentials(&self) -> Option<GeminiConfig> {
    self.api_key.as_ref().map(|api_key| GeminiConfig {
      api_key:  api_key.clone(),
      model:    self.model.clone(),
      base_url: self.base_url.clone()
    })
  }
}
