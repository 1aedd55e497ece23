use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Failure talking to an upstream news feed or market-data provider.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP or network error
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {target}")]
    Status { status: u16, target: String },

    /// Response parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery credentials not configured")]
    MissingCredentials,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Delivery rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Why a ticker with enough closes still produced no mover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoverError {
    #[error("{ticker}: previous close is zero")]
    ZeroPrevious { ticker: String },

    #[error("{ticker}: non-finite percent change")]
    NonFinite { ticker: String },
}
