use thiserror::Error;

// Basic error handling with thiserror
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by, or while talking to, the metadata provider.
    /// The provider's own message is carried verbatim when it supplies one.
    #[error("{0}")]
    ExternalApi(String),
}

impl PlaylistError {
    /// HTTP-style status code a request handler should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            PlaylistError::InvalidInput(_) => 400,
            PlaylistError::Configuration(_)
            | PlaylistError::NotFound(_)
            | PlaylistError::ExternalApi(_) => 500,
        }
    }

    pub fn is_external_api(&self) -> bool {
        matches!(self, PlaylistError::ExternalApi(_))
    }
}

// Transport failures and timeouts are provider failures as far as callers care
impl From<reqwest::Error> for PlaylistError {
    fn from(err: reqwest::Error) -> Self {
        PlaylistError::ExternalApi(format!("HTTP request failed: {}", err))
    }
}

impl From<serde_json::Error> for PlaylistError {
    fn from(err: serde_json::Error) -> Self {
        PlaylistError::ExternalApi(format!("Unexpected response shape: {}", err))
    }
}
