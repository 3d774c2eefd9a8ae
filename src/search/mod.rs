//! Live, archived and tiered media search.
//!
//! - [`LiveSearch`] runs the provider, scores each candidate with the
//!   [`Ranker`](crate::scoring::Ranker) and archives what it yields.
//! - [`CacheSearch`] answers from the archive alone.
//! - [`MediaSearch`] puts the two behind one cache-first [`MediaSearch::lookup`].

pub mod cache;
pub mod context;
pub mod engine;
pub mod error;
pub mod featured;
pub mod live;
pub mod memo;

#[cfg(test)]
mod fixtures;

pub use cache::CacheSearch;
pub use context::QueryContext;
pub use engine::{MediaSearch, TieredLookupResult};
pub use error::{SearchError, SearchResult};
pub use featured::FeaturedMedia;
pub use live::{LiveSearch, MediaStream};
pub use memo::LiveMemo;
