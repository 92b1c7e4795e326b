//! Error types for the catalog and spreadsheet clients.

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-success HTTP status not covered by a more specific variant.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    /// Token rejected (401/403).
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Resource missing (404, empty search result, sheet without worksheets).
    #[error("not found: {what}")]
    NotFound { what: String },

    /// Transport failure.
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body could not be parsed.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Service-account key file unreadable or malformed.
    #[error("credentials error: {message}")]
    Credentials { message: String },

    /// Token exchange or JWT signing failed.
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ClientError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::Credentials { .. } => 2,
            Self::Unauthorized { .. } | Self::Auth { .. } => 3,
            Self::Http { .. } | Self::Network { .. } => 4,
            Self::InvalidResponse { .. } | Self::NotFound { .. } => 5,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
