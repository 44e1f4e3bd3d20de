use thiserror::Error;

/// Failure while loading the employee directory.
///
/// The `Display` output is shown to the user as-is in the dashboard's error panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch data: {0}")]
    Transport(String),
    #[error("Failed to fetch data (HTTP {0})")]
    Status(u16),
    #[error("Failed to read employee data: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(error.to_string())
    }
}
