pub mod player;
pub mod search;

pub use player::to_rating_record;
pub use search::extract_hits;
