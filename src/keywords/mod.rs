//! Vocabulary for recognising artists, songs, playlists, genres and the provider in a
//! spoken phrase.

pub mod harvest;
pub mod matcher;
mod text;
pub mod vocabulary;


pub use harvest::{Harvest, is_plausible_artist, normalize_name};
pub use matcher::{Entities, EntityClass, EntityExtractor, KeywordMatcher};
pub use vocabulary::ProviderVocabulary;
