use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    /// No snapshot has ever been recorded. Distinct from a transport
    /// failure: the store answered, it just holds nothing.
    #[error("no market snapshot recorded yet")]
    EmptyRepository,

    #[error("snapshot store unavailable")]
    RepositoryUnavailable(#[source] anyhow::Error),

    #[error("unsupported sort field: {0}")]
    InvalidSortField(String),
}

pub type MarketResult<T> = Result<T, MarketError>;
