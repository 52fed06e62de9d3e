type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum EtherscanError {
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("decode response: {0}")]
    Decode(String),

    #[error("Etherscan API error: {message}")]
    Api { message: String },
}

impl EtherscanError {
    pub(crate) fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// The service could not be reached at all (timeout, refused, DNS).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// The service understood the request but reported a logical failure.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// reqwest renders the request URL in its errors, and a GET URL carries the
// `apikey` query parameter. Strip it before the error is stored or logged.
impl From<reqwest::Error> for EtherscanError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.without_url())
    }
}
