use thiserror::Error;

/// Failures reported by a [`SearchProvider`](super::SearchProvider).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("provider unavailable: {reason}")]
    Unavailable { reason: String },

    /// The connection failed mid-search.
    #[error("network error: {reason}")]
    Network { reason: String },

    /// The provider answered with something that could not be turned into candidates.
    #[error("invalid provider response: {reason}")]
    InvalidResponse { reason: String },
}

/// Convenience result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
