use log::debug;

use super::location::{ParsedLocation, parse_location};
use crate::domain::{NameQuery, PlayerId, SearchHit};

/// A name-compatible search hit, ready for tie-breaking
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub hit: SearchHit,
    pub location: ParsedLocation,
    /// Singles plus doubles rating; zero means the profile never got rated
    pub activity_score: f64,
}

impl ScoredCandidate {
    pub fn from_hit(hit: SearchHit) -> Self {
        let location = parse_location(hit.location_display.as_deref());
        let activity_score = activity_score(&hit);
        Self {
            hit,
            location,
            activity_score,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.hit.id
    }

    pub fn city(&self) -> Option<&str> {
        self.location.city.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.location.region.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.activity_score > 0.0
    }
}

/// Keep hits whose first name equals the query's and whose last name contains
/// the query's last token, in input order.
pub fn score_candidates(query: &NameQuery, hits: &[SearchHit]) -> Vec<ScoredCandidate> {
    if query.is_blank() {
        return Vec::new();
    }

    let candidates: Vec<ScoredCandidate> = hits
        .iter()
        .filter(|hit| matches_name(query, hit))
        .cloned()
        .map(ScoredCandidate::from_hit)
        .collect();

    for candidate in &candidates {
        debug!(
            "- {} {} (ID: {}): City: {}, Region: {}, Singles: {}, Doubles: {}, Activity Score: {}",
            candidate.hit.first_name,
            candidate.hit.last_name,
            candidate.id(),
            candidate.city().unwrap_or("Unknown"),
            candidate.region().unwrap_or("Unknown"),
            candidate.hit.rating_singles.unwrap_or(0.0),
            candidate.hit.rating_doubles.unwrap_or(0.0),
            candidate.activity_score
        );
    }

    candidates
}

fn matches_name(query: &NameQuery, hit: &SearchHit) -> bool {
    hit.first_name.to_lowercase() == query.first_name()
        && hit.last_name.to_lowercase().contains(query.last_name_key())
}

fn activity_score(hit: &SearchHit) -> f64 {
    hit.rating_singles.unwrap_or(0.0) + hit.rating_doubles.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, first: &str, last: &str, location: Option<&str>) -> SearchHit {
        SearchHit {
            id: PlayerId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            location_display: location.map(str::to_string),
            rating_singles: None,
            rating_doubles: None,
        }
    }

    #[test]
    fn test_filters_by_exact_first_name() {
        let query = NameQuery::parse("Jane Doe");
        let hits = vec![
            hit("1", "Jane", "Doe", None),
            hit("2", "Janet", "Doe", None),
            hit("3", "John", "Doe", None),
        ];

        let candidates = score_candidates(&query, &hits);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id().as_str(), "1");
        assert!(candidates.iter().all(|c| c.hit.first_name.to_lowercase() == "jane"));
    }

    #[test]
    fn test_last_name_substring_and_case() {
        let query = NameQuery::parse("ana garcia");
        let hits = vec![
            hit("1", "ANA", "Garcia-Lopez", None),
            hit("2", "Ana", "Lopez", None),
            hit("3", "Ana", "de la GARCIA", None),
        ];

        let ids: Vec<_> = score_candidates(&query, &hits)
            .iter()
            .map(|c| c.id().as_str().to_string())
            .collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let query = NameQuery::parse("Jane Doe");
        let hits = vec![
            hit("b", "Jane", "Doe", None),
            hit("a", "Jane", "Doe", None),
            hit("c", "Jane", "Doe", None),
        ];

        let ids: Vec<_> = score_candidates(&query, &hits)
            .iter()
            .map(|c| c.id().to_string())
            .collect();

        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_activity_score_and_location() {
        let query = NameQuery::parse("Jane Doe");
        let mut rated = hit("1", "Jane", "Doe", Some("Katy, TX"));
        rated.rating_singles = Some(6.5);
        rated.rating_doubles = Some(7.25);
        let mut singles_only = hit("2", "Jane", "Doe", None);
        singles_only.rating_singles = Some(4.0);

        let candidates = score_candidates(&query, &[rated, singles_only, hit("3", "Jane", "Doe", None)]);

        assert_eq!(candidates[0].activity_score, 13.75);
        assert_eq!(candidates[0].city(), Some("katy"));
        assert_eq!(candidates[0].region(), Some("tx"));
        assert_eq!(candidates[1].activity_score, 4.0);
        assert_eq!(candidates[1].city(), None);
        assert_eq!(candidates[2].activity_score, 0.0);
        assert!(!candidates[2].is_active());
    }

    #[test]
    fn test_empty_inputs() {
        let query = NameQuery::parse("Jane Doe");
        assert!(score_candidates(&query, &[]).is_empty());
        assert!(score_candidates(&query, &[hit("1", "John", "Smith", None)]).is_empty());
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let query = NameQuery::parse("");
        assert!(score_candidates(&query, &[hit("1", "", "", None)]).is_empty());
    }
}
