//! Configuration constants and settings for the calculator.

use std::path::PathBuf;
use std::time::Duration;

/// Published recipe table.
pub const DEFAULT_SOURCE_URL: &str = "https://amine3831937.github.io/numbers/substances.json";

/// Query parameter carrying the cache-busting timestamp.
pub const CACHE_BUST_PARAM: &str = "v";

/// Upper bound on the startup fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Lowest accepted percent adjustment. Anything below would give negative dosages.
pub const MIN_PERCENT: i64 = -100;

/// User-visible texts shown by the presentation layer.
pub mod messages {
    /// Result area before any calculation.
    pub const RESULT_PLACEHOLDER: &str = "Risultato";
    /// Fabric selector with nothing chosen.
    pub const FABRIC_PLACEHOLDER: &str = "Nastro";
    /// Width selector with nothing chosen.
    pub const WIDTH_PLACEHOLDER: &str = "Misura";
    /// One or more required fields are blank.
    pub const INCOMPLETE_FIELDS: &str = "Completa tutti i campi.";
    /// No recipe for the selected combination.
    pub const NOT_FOUND: &str = "Dati non trovati.";
    /// The recipe table could not be loaded at startup.
    pub const DATA_UNAVAILABLE: &str = "Dati non disponibili (offline).";
    /// History is empty.
    pub const EMPTY_HISTORY: &str = "Nessuna operazione salvata.";
    /// Prefix for any other error.
    pub const ERROR_PREFIX: &str = "Errore";
}

/// Where the recipe table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP(S) URL, fetched with a cache-busting query parameter.
    Remote(String),
    /// Local JSON file with the same layout.
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Recipe store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table location.
    pub source: DataSource,
    /// Global timeout for the remote fetch.
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Remote(DEFAULT_SOURCE_URL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    /// Fetch the table from a custom URL.
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            source: DataSource::Remote(url.into()),
            ..Default::default()
        }
    }

    /// Read the table from a local file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: DataSource::File(path.into()),
            ..Default::default()
        }
    }

    /// Override the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if the table is fetched over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self.source, DataSource::Remote(_))
    }
}
