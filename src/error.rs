#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch URL: {url} - {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Fetch timeout for URL: {0}")]
    FetchTimeout(String),

    #[error("Unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Interaction update rejected: {0}")]
    Interaction(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Coarse classification recorded with each failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Protocol,
    Interaction,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Protocol => "protocol",
            Self::Interaction => "interaction",
            Self::Config => "config",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FetchFailed { .. } | Self::FetchTimeout(_) => ErrorKind::Network,
            Self::UnexpectedStatus { .. } | Self::MalformedResponse { .. } => ErrorKind::Protocol,
            Self::Interaction(_) => ErrorKind::Interaction,
            Self::InvalidUrl(_) | Self::Config(_) => ErrorKind::Config,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FetchFailed { .. } => "FETCH_FAILED",
            Self::FetchTimeout(_) => "FETCH_TIMEOUT",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            Self::Interaction(_) => "INTERACTION_REJECTED",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Config(_) => "INVALID_CONFIG",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            Self::FetchTimeout(url)
        } else if e.is_decode() {
            Self::MalformedResponse {
                url,
                reason: e.to_string(),
            }
        } else {
            Self::FetchFailed {
                url,
                reason: e.to_string(),
            }
        }
    }
}

impl From<serenity::Error> for Error {
    fn from(e: serenity::Error) -> Self {
        Self::Interaction(e.to_string())
    }
}
