//! The external search provider seam.
//!
//! A provider turns a phrase into a lazy, relevance-ordered stream of [`Candidate`]s.
//! Failures may surface when opening the search or as an `Err` item mid-stream.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::{ProviderError, ProviderResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSearchProvider;

use futures_util::stream::BoxStream;

use crate::media::Candidate;

/// Stream of candidates produced by one provider search.
pub type CandidateStream = BoxStream<'static, ProviderResult<Candidate>>;

/// A live media search backend.
pub trait SearchProvider: Send + Sync {
    /// Starts a search for `phrase`.
    fn search(
        &self,
        phrase: &str,
    ) -> impl std::future::Future<Output = ProviderResult<CandidateStream>> + Send;
}
