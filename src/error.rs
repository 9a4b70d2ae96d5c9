//! Error types.
//!
//! Every error here is fatal: the dashboard has no retry path, so these only
//! need to carry enough context for the final diagnostic.

use std::fmt;
use std::io;

/// Failure to obtain the peer list from the node.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP client could not be constructed.
    Client(reqwest::Error),
    /// Connection refused, DNS failure, timeout and other transport errors.
    Transport { url: String, source: reqwest::Error },
    /// The node answered with a non-2xx status.
    Status { url: String, status: u16 },
    /// Response body could not be read.
    Body { url: String, source: reqwest::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(e) => write!(f, "failed to build HTTP client: {}", e),
            FetchError::Transport { url, source } => {
                write!(f, "request to {} failed: {}", url, source)
            }
            FetchError::Status { url, status } => {
                write!(f, "request to {} returned HTTP {}", url, status)
            }
            FetchError::Body { url, source } => {
                write!(f, "failed to read response from {}: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Client(e) => Some(e),
            FetchError::Transport { source, .. } | FetchError::Body { source, .. } => Some(source),
            FetchError::Status { .. } => None,
        }
    }
}

/// Response body is not a JSON document of the expected top-level shape.
#[derive(Debug)]
pub enum ParseError {
    /// Body is not valid JSON.
    Json(serde_json::Error),
    /// Top level is valid JSON but not an object.
    NotAnObject,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json(e) => write!(f, "malformed peers response: {}", e),
            ParseError::NotAnObject => write!(f, "malformed peers response: expected a JSON object"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Json(e) => Some(e),
            ParseError::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e)
    }
}

/// Terminal setup, drawing or teardown failure.
#[derive(Debug)]
pub struct UiError(pub io::Error);

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "terminal error: {}", self.0)
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<io::Error> for UiError {
    fn from(e: io::Error) -> Self {
        UiError(e)
    }
}

/// Reason the refresh loop stopped.
#[derive(Debug)]
pub enum RefreshError {
    Fetch(FetchError),
    Parse(ParseError),
    /// The UI side of the repaint channel is gone.
    Disconnected,
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::Fetch(e) => write!(f, "{}", e),
            RefreshError::Parse(e) => write!(f, "{}", e),
            RefreshError::Disconnected => write!(f, "UI event channel closed"),
        }
    }
}

impl std::error::Error for RefreshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RefreshError::Fetch(e) => Some(e),
            RefreshError::Parse(e) => Some(e),
            RefreshError::Disconnected => None,
        }
    }
}

impl From<FetchError> for RefreshError {
    fn from(e: FetchError) -> Self {
        RefreshError::Fetch(e)
    }
}

impl From<ParseError> for RefreshError {
    fn from(e: ParseError) -> Self {
        RefreshError::Parse(e)
    }
}

/// Error returned by [`crate::tui::App::run`].
#[derive(Debug)]
pub enum AppError {
    Ui(UiError),
    Refresh(RefreshError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Ui(e) => write!(f, "{}", e),
            AppError::Refresh(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Ui(e) => Some(e),
            AppError::Refresh(e) => Some(e),
        }
    }
}

impl From<UiError> for AppError {
    fn from(e: UiError) -> Self {
        AppError::Ui(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Ui(UiError(e))
    }
}

impl From<RefreshError> for AppError {
    fn from(e: RefreshError) -> Self {
        AppError::Refresh(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let e = FetchError::Status {
            url: "http://127.0.0.1:3500/eth/v1/node/peers".to_string(),
            status: 503,
        };
        assert_eq!(
            e.to_string(),
            "request to http://127.0.0.1:3500/eth/v1/node/peers returned HTTP 503"
        );
    }

    #[test]
    fn refresh_error_displays_inner_parse_error() {
        let e: RefreshError = ParseError::NotAnObject.into();
        assert!(e.to_string().contains("expected a JSON object"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
