use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::GenerationConfig;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
const GROQ_API_KEY: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub auth: AuthSettings,
    pub llm: LlmSettings,
    pub generation: GenerationConfig,
    pub documents: DocumentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Externally reachable origin, used for `file_url`s.
    pub public_base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            public_base_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Empty selects the in-memory repositories.
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
        }
    }
}

impl DatabaseSettings {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub base_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("media"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_token_ttl_secs: 300,
            refresh_token_ttl_secs: 86_400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: String::new(),
            model: "meta-llama/llama-4-maverick-17b-128e-instruct".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub fetch_timeout_secs: u64,
    pub max_upload_mb: usize,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 15,
            max_upload_mb: 25,
        }
    }
}

impl DocumentSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,studyhub=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Loads `config/base.toml`, then `config/<environment>.toml`, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(Path::new("config"), environment)
    }

    pub fn load_from(config_dir: &Path, environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(GROQ_API_KEY) {
                settings.llm.api_key = key;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "auth.jwt_secret must not be empty".to_string(),
            ));
        }
        if self.auth.access_token_ttl_secs == 0 || self.auth.refresh_token_ttl_secs == 0 {
            return Err(SettingsError::Invalid(
                "auth token lifetimes must be positive".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(SettingsError::Invalid(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.documents.fetch_timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "documents.fetch_timeout_secs must be positive".to_string(),
            ));
        }
        if self.llm.base_url.trim().is_empty() || self.llm.model.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "llm.base_url and llm.model must be set".to_string(),
            ));
        }

        self.generation.validate().map_err(SettingsError::Invalid)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
