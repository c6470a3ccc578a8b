//! Reading the raw recipe document from the network or disk.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;
use ureq::Agent;

use crate::config::CACHE_BUST_PARAM;
use crate::error::{DyeError, Result};

/// Append a timestamp query parameter so intermediate caches are bypassed.
pub fn cache_busted_url(url: &str, unix_secs: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, CACHE_BUST_PARAM, unix_secs)
}

/// Fetch the document body with a single GET. Non-2xx statuses are errors.
pub fn fetch_remote(url: &str, timeout: Duration) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let full_url = cache_busted_url(url, now);
    debug!("GET {}", full_url);

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into();

    let fetch_error = |e: ureq::Error| DyeError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let mut response = agent.get(&full_url).call().map_err(fetch_error)?;
    response.body_mut().read_to_string().map_err(fetch_error)
}

/// Read the document from a local file.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DyeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_bust_appends_query() {
        assert_eq!(
            cache_busted_url("https://example.org/substances.json", 1700000000),
            "https://example.org/substances.json?v=1700000000"
        );
    }

    #[test]
    fn test_cache_bust_extends_existing_query() {
        assert_eq!(
            cache_busted_url("https://example.org/data?branch=main", 42),
            "https://example.org/data?branch=main&v=42"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/recipes.json")).unwrap_err();
        assert!(matches!(err, DyeError::ReadFile { .. }));
    }
}
