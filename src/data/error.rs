/// Why a fetch did not produce data.
///
/// Cloneable so it can sit inside shared fetch state; the underlying client errors
/// are flattened to their messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {message}")]
    Body { url: String, message: String },

    #[error("response from {url} has an unexpected shape: {message}")]
    BadShape { url: String, message: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. }
            | Self::BadShape { url, .. } => url,
        }
    }
}
