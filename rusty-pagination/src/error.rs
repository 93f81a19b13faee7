//! Construction errors for pagination sessions.

use thiserror::Error;

/// Reasons a [`Paginator`](crate::Paginator) could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginatorError {
    /// The host connection cannot identify the bot user it runs as.
    #[error("host connection has no current user; is the gateway ready?")]
    InvalidHost,

    /// Neither text nor rich pages were supplied, or the list was empty.
    #[error("no pages to paginate: {0}")]
    MissingContent(&'static str),

    #[error("invalid paginator config: {0}")]
    InvalidConfig(String),
}
