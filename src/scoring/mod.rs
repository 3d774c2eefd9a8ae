//! Confidence scoring for live provider candidates.
//!
//! A score starts from a caller-supplied base (request-level bonuses such as "the user
//! asked for music" or "the user named this provider") and is then adjusted per
//! candidate:
//!
//! - minus a positional decay, trusting the provider's own ordering;
//! - minus a penalty for bare videos;
//! - plus weighted fuzzy similarity of the phrase to the artist and to the title;
//! - minus a penalty for generic requests.
//!
//! The result is clamped above at 100. There is no lower clamp; a negative score means
//! "essentially no match" and is still a valid ordering key.
//!
//! Similarity comes from a [`FuzzyMatcher`]; [`StrsimMatcher`] is the default.

pub mod ranker;
pub mod similarity;


pub use ranker::{Ranker, RankerWeights};
pub use similarity::{FuzzyMatcher, StrsimMatcher};
