/// Boxed error carried by the variants that wrap a lower-level failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Ways a request to the GraphQL endpoint can fail before a response is in hand
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The request could not be assembled
    #[error("could not build the request: {0}")]
    Request(#[from] http::Error),
    /// The endpoint could not be reached
    #[error("could not connect to the endpoint: {0}")]
    Connect(BoxError),
    /// No response arrived within the configured timeout
    #[error("the request timed out")]
    TimedOut,
    /// Sending or receiving a body failed midway
    #[error("the connection failed while transferring a body: {0}")]
    Body(BoxError),
    /// Anything else the HTTP client reported
    #[error("unexpected HTTP failure: {0}")]
    Unexpected(BoxError),
}

impl HttpServiceError {
    /// Whether trying the same request again may succeed
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            HttpServiceError::Connect(_) | HttpServiceError::TimedOut | HttpServiceError::Body(_)
        )
    }
}

impl From<reqwest::Error> for HttpServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpServiceError::TimedOut
        } else if err.is_connect() {
            HttpServiceError::Connect(err.into())
        } else if err.is_body() || err.is_decode() {
            HttpServiceError::Body(err.into())
        } else {
            HttpServiceError::Unexpected(err.into())
        }
    }
}

impl From<tokio::time::error::Elapsed> for HttpServiceError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        HttpServiceError::TimedOut
    }
}
