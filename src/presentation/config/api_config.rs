use super::Settings;

const BYTES_PER_MB: usize = 1024 * 1024;

/// Values the HTTP layer needs at request time.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Absolute base used to build `file_url`s, without trailing slash.
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.server.public_base_url,
            settings.documents.max_upload_mb,
        )
    }

    pub fn new(public_base_url: &str, max_upload_mb: usize) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_upload_bytes: max_upload_mb.saturating_mul(BYTES_PER_MB),
        }
    }

    pub fn media_url(&self, path: &str) -> String {
        format!("{}/media/{}", self.public_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000", 25)
    }
}
