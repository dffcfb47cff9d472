use client_core::error::ClientError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the goahead service, including any path prefix
    /// (e.g. `http://localhost:8080/goahead`).
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationSettings {
    /// Page size used when no preference was persisted.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default)]
    pub number_source: DocumentNumberSource,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        PaginationSettings {
            default_page_size: default_page_size(),
            number_source: DocumentNumberSource::default(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}

/// Where the next document number comes from. Older backends lack the
/// dedicated endpoint, in which case the cached entities are scanned.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentNumberSource {
    #[default]
    Remote,
    CachedScan,
}

impl Settings {
    pub fn load() -> Result<Self, ClientError> {
        client_core::config::load()
    }
}
