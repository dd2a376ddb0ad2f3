use thiserror::Error;

/// Errors raised while talking to ESI or zKillboard.
#[derive(Debug, Error)]
pub enum EveError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{service} returned status {status}")]
    Status { service: &'static str, status: u16 },

    /// The body was not the JSON shape we expected.
    #[error("failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}

impl EveError {
    /// Client-side statuses (404 for unknown ids, 400 for malformed names)
    /// mean "no such entity" rather than "service broken".
    pub fn is_not_found_class(&self) -> bool {
        matches!(self, EveError::Status { status, .. } if (400..500).contains(status))
    }
}

pub type EveResult<T> = std::result::Result<T, EveError>;

/// Price lookups against the cached snapshot.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    #[error("no market price for type {0}")]
    UnknownType(i64),
}
