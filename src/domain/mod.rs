pub mod models;
pub mod progress;

pub use models::{GroupSummary, NameQuery, PlayerId, PlayerRatingRecord, SearchHit, TeamReport};
pub use progress::LookupProgress;
