//! Runtime configuration assembled from command-line arguments.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Beacon node API address used when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3500";

/// Validated dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the node, without the API path.
    pub endpoint: String,
    /// Pause between refresh cycles.
    pub interval: Duration,
}

impl Config {
    /// Validates raw arguments. Errors are user-facing messages.
    pub fn new(endpoint: &str, interval_secs: u64) -> Result<Self, String> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !(has_scheme(endpoint, "http://") || has_scheme(endpoint, "https://")) {
            return Err(format!(
                "invalid endpoint '{}': expected http:// or https:// URL",
                endpoint
            ));
        }
        if interval_secs == 0 {
            return Err("interval must be at least 1 second".to_string());
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            interval: Duration::from_secs(interval_secs),
        })
    }
}

/// URL schemes are case-insensitive.
fn has_scheme(endpoint: &str, scheme: &str) -> bool {
    endpoint
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Opens (creating if needed) a log file for appending.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_default_endpoint() {
        let config = Config::new(DEFAULT_ENDPOINT, 2).unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:3500");
        assert_eq!(config.interval, Duration::from_secs(2));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::new("", 2).is_err());
        assert!(Config::new("127.0.0.1:3500", 2).is_err());
        assert!(Config::new("ftp://node", 2).is_err());
        assert!(Config::new("https://node:5052", 0).is_err());
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(
            Config::new("HTTP://node:5052", 2).unwrap().endpoint,
            "HTTP://node:5052"
        );
        assert!(Config::new("Https://node:5052", 2).is_ok());
        assert!(Config::new("HTTPX://node", 2).is_err());
        assert!(Config::new("http:/", 2).is_err());
    }

    #[test]
    fn trims_whitespace() {
        let config = Config::new("  https://node:5052 ", 5).unwrap();
        assert_eq!(config.endpoint, "https://node:5052");
    }

    #[test]
    fn log_file_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peertop.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
