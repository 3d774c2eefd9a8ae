//! Media records: provider candidates in, scored results out.

pub mod candidate;
pub mod entry;
pub mod types;

#[cfg(test)]
mod tests;

pub use candidate::{Candidate, CollectionInfo, CollectionKind, TrackInfo};
pub use entry::{MediaResult, PlaylistEntry, ResultEntry, SkillIdentity};
pub use types::{MediaType, PlaybackType};
