//! Service configuration: defaults, then an optional TOML file, then environment.

use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "GAMECODE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "gamecode.toml";
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_S: u64 = 60;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    fn default_base_url(self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::OpenAi => "https://api.openai.com/v1",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
        })
    }
}

impl FromStr for Provider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    pub timeout_s: u64,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    pub llm: LlmConfig,
}

/// On-disk shape; every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    allowed_origin: Option<String>,
    #[serde(default)]
    llm: FileLlmConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileLlmConfig {
    provider: Option<Provider>,
    model: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout_s: Option<u64>,
    temperature: Option<f32>,
}

impl Config {
    /// Loads `.env`, the config file (if any) and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        let explicit = env::var(CONFIG_PATH_ENV).ok();
        Self::load_with_path(explicit.as_deref(), |key| env::var(key).ok())
    }

    /// Reads the config file at `explicit`, or the default path when `None`.
    /// A missing default file is fine; a missing explicit one is not.
    pub fn load_with_path<F>(explicit: Option<&str>, env_lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = Path::new(explicit.unwrap_or(DEFAULT_CONFIG_PATH));
        let contents = match fs::read_to_string(path) {
            Ok(s) => {
                info!("Using config file {}", path.display());
                Some(s)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => None,
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_sources(contents.as_deref().map(|c| (path, c)), env_lookup)
    }

    /// Resolves the configuration from file contents and an environment lookup.
    pub fn from_sources<F>(file: Option<(&Path, &str)>, env_lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_cfg = match file {
            Some((path, contents)) => toml::from_str::<FileConfig>(contents).map_err(|source| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?,
            None => FileConfig::default(),
        };

        let var = |key: &str| env_lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("GAMECODE_PORT") {
            Some(v) => parse_value("GAMECODE_PORT", &v)?,
            None => file_cfg.port.unwrap_or(DEFAULT_PORT),
        };

        let provider = match var("GAMECODE_LLM_PROVIDER") {
            Some(v) => v.parse::<Provider>().map_err(|_| ConfigError::InvalidValue {
                key: "GAMECODE_LLM_PROVIDER",
                value: v.clone(),
            })?,
            None => file_cfg.llm.provider.unwrap_or(Provider::Gemini),
        };

        let timeout_s = match var("GAMECODE_LLM_TIMEOUT_S") {
            Some(v) => parse_value("GAMECODE_LLM_TIMEOUT_S", &v)?,
            None => file_cfg.llm.timeout_s.unwrap_or(DEFAULT_TIMEOUT_S),
        };
        if timeout_s == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_s",
                value: "0".to_string(),
            });
        }

        let api_key = var(API_KEY_ENV)
            .or(file_cfg.llm.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Config {
            host: var("GAMECODE_HOST")
                .or(file_cfg.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            allowed_origin: var("GAMECODE_ALLOWED_ORIGIN")
                .or(file_cfg.allowed_origin)
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            llm: LlmConfig {
                provider,
                model: var("GAMECODE_LLM_MODEL")
                    .or(file_cfg.llm.model)
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: var("GAMECODE_LLM_BASE_URL")
                    .or(file_cfg.llm.base_url)
                    .unwrap_or_else(|| provider.default_base_url().to_string()),
                api_key,
                timeout_s,
                temperature: file_cfg.llm.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_only_api_key() {
        let cfg = Config::from_sources(None, env_of(&[(API_KEY_ENV, "k")])).unwrap();
        assert_eq!(cfg.bind_address(), "0.0.0.0:8000");
        assert_eq!(cfg.allowed_origin, "http://localhost:5173");
        assert_eq!(cfg.llm.provider, Provider::Gemini);
        assert_eq!(cfg.llm.model, "gemini-1.5-flash");
        assert_eq!(cfg.llm.base_url, "https://generativelanguage.googleapis.com/v1beta");
        assert_eq!(cfg.llm.timeout_s, 60);
        assert_eq!(cfg.llm.api_key, "k");
    }

    #[test]
    fn missing_or_blank_api_key_is_fatal() {
        let err = Config::from_sources(None, env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = Config::from_sources(None, env_of(&[(API_KEY_ENV, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(err.to_string(), "GOOGLE_API_KEY not found in environment variables");
    }

    #[test]
    fn file_values_apply_and_env_wins() {
        let toml = r#"
            port = 9000
            allowed_origin = "https://games.example"

            [llm]
            provider = "openai"
            model = "gpt-4o-mini"
            api_key = "from-file"
            temperature = 0.1
        "#;
        let cfg = Config::from_sources(
            Some((Path::new("gamecode.toml"), toml)),
            env_of(&[("GAMECODE_PORT", "9100"), ("GAMECODE_LLM_TIMEOUT_S", "15")]),
        )
        .unwrap();

        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.allowed_origin, "https://games.example");
        assert_eq!(cfg.llm.provider, Provider::OpenAi);
        assert_eq!(cfg.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.llm.model, "gpt-4o-mini");
        assert_eq!(cfg.llm.api_key, "from-file");
        assert_eq!(cfg.llm.timeout_s, 15);
        assert!((cfg.llm.temperature - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn bad_values_are_rejected() {
        let err =
            Config::from_sources(None, env_of(&[(API_KEY_ENV, "k"), ("GAMECODE_PORT", "eighty")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "GAMECODE_PORT", .. }));

        let err = Config::from_sources(
            None,
            env_of(&[(API_KEY_ENV, "k"), ("GAMECODE_LLM_PROVIDER", "claude")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = Config::from_sources(
            None,
            env_of(&[(API_KEY_ENV, "k"), ("GAMECODE_LLM_TIMEOUT_S", "0")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "timeout_s", .. }));
    }

    #[test]
    fn unknown_file_keys_are_a_parse_error() {
        let err = Config::from_sources(
            Some((Path::new("gamecode.toml"), "colour = \"red\"")),
            env_of(&[(API_KEY_ENV, "k")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[llm]\nmodel = \"gemini-pro\"\n").unwrap();

        let cfg = Config::load_with_path(path.to_str(), env_of(&[(API_KEY_ENV, "k")])).unwrap();
        assert_eq!(cfg.llm.model, "gemini-pro");
        assert_eq!(cfg.llm.api_key, "k");
    }

    #[test]
    fn load_fails_when_explicit_config_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err =
            Config::load_with_path(path.to_str(), env_of(&[(API_KEY_ENV, "k")])).unwrap_err();
        match err {
            ConfigError::Read { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_parse_errors_with_the_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "port = \"not a number\"\n").unwrap();

        let err =
            Config::load_with_path(path.to_str(), env_of(&[(API_KEY_ENV, "k")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
