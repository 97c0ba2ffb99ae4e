use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors that can occur while resolving and enriching targets
#[derive(Error, Debug)]
pub enum ReconError {
    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// WHOIS lookup failed
    #[error("WHOIS lookup failed: {0}")]
    Whois(String),

    /// Subdomain-candidate search failed
    #[error("search query failed: {0}")]
    Search(String),

    /// Authentication failed - invalid or missing API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after: Option<u64>,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Target string could not be classified
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReconError {
    /// Returns true if the error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Http(_))
    }

    /// Returns the HTTP status code if this maps to an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
