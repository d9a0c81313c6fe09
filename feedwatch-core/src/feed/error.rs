use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("feed {url} answered with status {status}")]
    Status { url: Url, status: u16 },

    #[error("feed {url} is not an event stream (content type {content_type:?})")]
    ContentType { url: Url, content_type: String },

    #[error("feed stream read failed: {0}")]
    Read(#[source] reqwest::Error),

    #[error("feed stream ended")]
    Eof,
}

impl TransportError {
    /// Errors after which the transport gives up instead of reconnecting.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TransportError::Status { .. } | TransportError::ContentType { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid feed url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("a feed connection is already open")]
    SlotBusy,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
