use crate::api::models::PlayerResponse;
use crate::domain::PlayerRatingRecord;

/// Map a player profile to a rating record; `fallback_name` is used when the
/// profile has no display name.
pub fn to_rating_record(response: PlayerResponse, fallback_name: &str) -> PlayerRatingRecord {
    PlayerRatingRecord {
        display_name: response
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string()),
        singles_rating: response.rating_singles,
        doubles_rating: response.rating_doubles,
        singles_reliability_pct: response.progress_singles,
        doubles_reliability_pct: response.progress_doubles,
    }
}
