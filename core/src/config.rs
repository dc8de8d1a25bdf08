//! Client configuration.
//!
//! Defaults target the public origin with the `cn` data set. A config can be
//! read from TOML or overlaid from `HAKUSH_*` environment variables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ORIGIN: &str = "https://api.hakush.in";
pub const DEFAULT_MAX_CONNECTIONS: usize = 16;

/// Content language of detail documents and language-scoped indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Cn,
    En,
    Jp,
    Kr,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Cn => "cn",
            Language::En => "en",
            Language::Jp => "jp",
            Language::Kr => "kr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cn" => Ok(Language::Cn),
            "en" => Ok(Language::En),
            "jp" => Ok(Language::Jp),
            "kr" => Ok(Language::Kr),
            _ => Err(ConfigError::Value {
                key: "language",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub origin: String,
    pub language: Language,
    /// Upper bound on requests in flight at once through `ReqwestTransport`.
    pub max_connections: usize,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            language: Language::default(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(raw)?;
        config.validate()
    }

    /// Defaults overlaid with `HAKUSH_ORIGIN`, `HAKUSH_LANGUAGE`,
    /// `HAKUSH_MAX_CONNECTIONS` and `HAKUSH_USER_AGENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();
        if let Some(origin) = lookup("HAKUSH_ORIGIN") {
            config.origin = origin;
        }
        if let Some(language) = lookup("HAKUSH_LANGUAGE") {
            config.language = language.parse()?;
        }
        if let Some(max) = lookup("HAKUSH_MAX_CONNECTIONS") {
            config.max_connections = max.trim().parse().map_err(|_| ConfigError::Value {
                key: "max_connections",
                value: max.clone(),
            })?;
        }
        if let Some(user_agent) = lookup("HAKUSH_USER_AGENT") {
            config.user_agent = Some(user_agent);
        }
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::Value {
                key: "max_connections",
                value: "0".to_string(),
            });
        }
        if self.origin.trim().is_empty() {
            return Err(ConfigError::Value {
                key: "origin",
                value: self.origin,
            });
        }
        Ok(self)
    }
}
