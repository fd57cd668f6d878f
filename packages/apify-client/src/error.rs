use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApifyError>;

#[derive(Debug, Error)]
pub enum ApifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Run {run_id} ended with status: {status}")]
    RunFailed { run_id: String, status: String },

    /// The scraper finished but reported an error for the requested item.
    #[error("Item error for {url}: {message}")]
    Item { url: String, message: String },
}

impl ApifyError {
    /// Check whether the failure means the requested resource doesn't exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            ApifyError::Api { status, .. } => *status == 404,
            ApifyError::Item { message, .. } => {
                let message = message.to_lowercase();
                message.contains("not found")
                    || message.contains("not available")
                    || message.contains("private")
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApifyError::Parse(err.to_string())
        } else {
            ApifyError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApifyError {
    fn from(err: serde_json::Error) -> Self {
        ApifyError::Parse(err.to_string())
    }
}
