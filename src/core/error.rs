use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FsError {
    /// The request could not be sent or no response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {url}")]
    Timeout {
        /// The URL of the request that timed out.
        url: String,
    },

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The service returned a non-2xx status code.
    #[error("Unexpected response status: {status} {reason} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status (e.g. `Internal Server Error`).
        reason: String,
        /// The URL that returned the error.
        url: String,
        /// The `detail` message from the error body, if the service sent one.
        detail: Option<String>,
    },

    /// The body was not valid JSON or did not match the expected shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body was valid JSON but its content could not be used.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Text submitted for analysis was empty after trimming whitespace.
    #[error("analysis text is empty")]
    EmptyInput,
}

/// Coarse classification of a failure, used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was obtained (connect failure, timeout, invalid request).
    Network,
    /// A response arrived with a non-2xx status.
    HttpStatus,
    /// A response arrived but its body could not be used.
    Parse,
    /// The request was refused locally before anything was sent.
    InvalidInput,
}

impl ErrorKind {
    /// A short lowercase name suitable for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::HttpStatus => "http_status",
            Self::Parse => "parse",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl FsError {
    /// Returns which of the three failure families this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Timeout { .. } | Self::Url(_) => ErrorKind::Network,
            Self::Status { .. } => ErrorKind::HttpStatus,
            Self::Json(_) | Self::Data(_) => ErrorKind::Parse,
            Self::EmptyInput => ErrorKind::InvalidInput,
        }
    }

    /// A non-empty message suitable for an error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { reason, detail, .. } => match detail {
                Some(d) if !d.trim().is_empty() => format!("Failed to fetch: {reason} ({d})"),
                _ => format!("Failed to fetch: {reason}"),
            },
            Self::Http(_) => "Failed to connect to API".to_string(),
            Self::Timeout { .. } => "Request timed out".to_string(),
            Self::Url(e) => format!("Invalid service URL: {e}"),
            Self::Json(_) | Self::Data(_) => "Received an unexpected response from the API".to_string(),
            Self::EmptyInput => "Enter some text to analyze".to_string(),
        }
    }
}
