/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use url::Url;

/// Upper bound accepted by the iTunes Search API
pub const MAX_SEARCH_LIMIT: usize = 200;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_search")]
    pub search: SearchSettings,

    #[serde(default = "default_itunes")]
    pub itunes: ItunesSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub source: SourceKind,

    /// Maximum number of tracks returned per search
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItunesSettings {
    #[serde(default = "default_itunes_base_url")]
    pub base_url: String,

    /// Two-letter store country code
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_lang")]
    pub lang: Option<String>,

    /// Among candidates for the same track, pick one that carries a preview
    #[serde(default = "default_prefer_preview")]
    pub prefer_preview: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Tries per search before giving up (connection errors, 429 and 5xx only)
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Upstream request budget shared by all searches
    #[serde(default = "default_requests_per_sec")]
    pub requests_per_sec: u32,
}

/// Where `/tracks/search` gets its tracks from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The built-in fallback catalog
    #[default]
    Catalog,
    /// The iTunes Search API
    Itunes,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// read when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Self::environment())
    }

    /// Environment source: `SOFT_` prefix, `__` between nested keys
    /// (e.g. `SOFT_SERVER__PORT=9000`)
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("SOFT")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn load_from(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(environment);

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid listen address: {}",
                self.server.host
            )));
        }

        if self.search.limit == 0 || self.search.limit > MAX_SEARCH_LIMIT {
            return Err(ServerError::Config(format!(
                "search.limit must be between 1 and {} (got {})",
                MAX_SEARCH_LIMIT, self.search.limit
            )));
        }

        if self.search.source == SourceKind::Itunes {
            let url = Url::parse(&self.itunes.base_url)
                .map_err(|e| ServerError::Config(format!("Invalid itunes.base_url: {}", e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ServerError::Config(
                    "itunes.base_url must start with http:// or https://".to_string(),
                ));
            }

            let country = &self.itunes.country;
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ServerError::Config(format!(
                    "itunes.country must be a two-letter code (got {:?})",
                    country
                )));
            }

            if self.itunes.attempts == 0 {
                return Err(ServerError::Config(
                    "itunes.attempts must be at least 1".to_string(),
                ));
            }

            if self.itunes.requests_per_sec == 0 {
                return Err(ServerError::Config(
                    "itunes.requests_per_sec must be at least 1".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_search() -> SearchSettings {
    SearchSettings {
        source: SourceKind::default(),
        limit: default_limit(),
    }
}

fn default_limit() -> usize {
    soft_core::MAX_RESULTS
}

fn default_itunes() -> ItunesSettings {
    ItunesSettings {
        base_url: default_itunes_base_url(),
        country: default_country(),
        lang: default_lang(),
        prefer_preview: default_prefer_preview(),
        timeout_secs: default_timeout_secs(),
        attempts: default_attempts(),
        retry_delay_ms: default_retry_delay_ms(),
        requests_per_sec: default_requests_per_sec(),
    }
}

fn default_itunes_base_url() -> String {
    "https://itunes.apple.com".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_lang() -> Option<String> {
    Some("en_us".to_string())
}

fn default_prefer_preview() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_requests_per_sec() -> u32 {
    2
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            search: default_search(),
            itunes: default_itunes(),
        }
    }
}
