mod api_config;
mod environment;
mod settings;

pub use api_config::ApiConfig;
pub use environment::Environment;
pub use settings::{
    AuthSettings, DatabaseSettings, DocumentSettings, LlmSettings, LoggingSettings,
    ServerSettings, Settings, SettingsError, StorageSettings,
};
