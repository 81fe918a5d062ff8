use anyhow::Context;
use digits::SignPolicy;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{fs::read_to_string, io::ErrorKind, path::Path};

pub const DEFAULT_PATH: &str = "digitsum.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Output {
  #[default]
  Plain,
  Json,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Sum,
  Root,
}

#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub log_level: Option<LevelFilter>,
  pub output: Output,
  pub mode: Mode,
  pub reject_negative: bool,
}

impl Config {
  #[inline]
  pub fn from_file(config_path: &Path) -> anyhow::Result<Config> {
    let text = read_to_string(config_path)
      .with_context(|| format!("failed to read {}", config_path.display()))?;
    Config::from_toml(&text).with_context(|| format!("failed to parse {}", config_path.display()))
  }

  #[inline]
  pub fn from_toml(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(text)
  }

  /// Reads the explicit path if one was given, otherwise the default file
  /// when it exists.
  pub fn load(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
      return Config::from_file(path);
    }

    match read_to_string(DEFAULT_PATH) {
      Ok(text) => Config::from_toml(&text).with_context(|| format!("failed to parse {DEFAULT_PATH}")),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
      Err(e) => Err(e).with_context(|| format!("failed to read {DEFAULT_PATH}")),
    }
  }

  #[inline]
  pub fn sign_policy(&self) -> SignPolicy {
    if self.reject_negative {
      SignPolicy::Reject
    } else {
      SignPolicy::Discount
    }
  }
}
