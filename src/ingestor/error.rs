#[derive(Debug)]
pub enum FetchError {
    Transport { source: reqwest::Error, url: String },
    MalformedResponse { source: serde_json::Error, url: String },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport { source: error, url } => {
                write!(f, "Request to '{url}' failed: {error}")
            }
            FetchError::MalformedResponse { source: error, url } => {
                write!(f, "Unexpected response body from '{url}': {error}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport { source: error, .. } => Some(error),
            FetchError::MalformedResponse { source: error, .. } => Some(error),
        }
    }
}
