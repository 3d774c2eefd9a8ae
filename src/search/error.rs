use std::time::Duration;

use thiserror::Error;

use crate::provider::ProviderError;
use crate::storage::StorageError;

/// Errors surfaced by live and tiered searches.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("provider search failed: {0}")]
    Provider(#[from] ProviderError),

    /// Persisting the archive after a pass failed.
    #[error("archive storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The provider did not open the search, or produce the next candidate, in time.
    #[error("provider did not respond within {timeout:?}")]
    ProviderTimeout { timeout: Duration },
}

impl SearchError {
    /// `true` for failures of the provider itself (including timeouts).
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            SearchError::Provider(_) | SearchError::ProviderTimeout { .. }
        )
    }
}

/// Convenience result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
