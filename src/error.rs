//! Error types shared across the crate.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found. Set it in the environment or in a .env file.")]
    ConfigMissing(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("An error occurred while calling the Gemini API: {0}")]
    ApiCallFailed(#[from] ApiError),

    #[error("API returned a successful but empty response.")]
    EmptyResponse,

    #[error(
        "Failed to decode the API's JSON response ({source}). \
         The model might not be following the schema. Response text: {raw}"
    )]
    MalformedJson {
        source: serde_json::Error,
        raw: String,
    },

    #[error("The API returned JSON, but not in the expected array format ({found}). Please try again.")]
    UnexpectedShape { found: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single call to the generative API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Transport(reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("invalid response envelope: {0}")]
    Envelope(String),
}

impl ApiError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Timeout => true,
            ApiError::Transport(err) => err.is_connect() || err.is_request(),
            ApiError::Status { status, .. } => *status == 429 || (500..600).contains(status),
            ApiError::Blocked(_) | ApiError::Envelope(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Envelope(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            body: String::new(),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Timeout.is_transient());
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(!status(400).is_transient());
        assert!(!status(401).is_transient());
        assert!(!status(403).is_transient());
        assert!(!ApiError::Blocked("SAFETY".to_string()).is_transient());
        assert!(!ApiError::Envelope("bad".to_string()).is_transient());
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err = Error::ConfigMissing("GOOGLE_API_KEY".to_string());
        assert!(err.to_string().starts_with("GOOGLE_API_KEY not found"));

        let err = Error::UnexpectedShape { found: "string" };
        assert!(err.to_string().contains("expected array format"));
    }
}
