use log::debug;

use crate::api::models::{HitSource, SearchResponse};
use crate::domain::SearchHit;

/// Flatten a search response into hits. Hits without a `source` or an id are dropped.
pub fn extract_hits(response: SearchResponse) -> Vec<SearchHit> {
    let raw_hits = response.players.map(|p| p.hits).unwrap_or_default();
    let total = raw_hits.len();

    let hits: Vec<SearchHit> = raw_hits
        .into_iter()
        .filter_map(|hit| hit.source)
        .filter_map(to_search_hit)
        .collect();

    if hits.len() < total {
        debug!("Dropped {} search hits without a source or id", total - hits.len());
    }
    hits
}

fn to_search_hit(source: HitSource) -> Option<SearchHit> {
    Some(SearchHit {
        id: source.id?.into(),
        first_name: source.first_name.unwrap_or_default(),
        last_name: source.last_name.unwrap_or_default(),
        location_display: source.location.and_then(|l| l.display),
        rating_singles: source.rating_singles,
        rating_doubles: source.rating_doubles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Vec<SearchHit> {
        extract_hits(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_extract_hits() {
        let hits = parse(json!({
            "players": {
                "hits": [
                    {
                        "source": {
                            "id": 123456,
                            "firstName": "Jane",
                            "lastName": "Doe",
                            "location": { "display": "Katy, TX" },
                            "myUtrSingles": 6.51,
                            "myUtrDoubles": 7.02
                        }
                    },
                    {
                        "source": {
                            "id": "abc",
                            "firstName": "Jane",
                            "lastName": "Doe-Smith",
                            "location": null,
                            "myUtrSingles": null
                        }
                    }
                ]
            }
        }));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, PlayerId::new("123456"));
        assert_eq!(hits[0].location_display.as_deref(), Some("Katy, TX"));
        assert_eq!(hits[0].rating_singles, Some(6.51));
        assert_eq!(hits[0].rating_doubles, Some(7.02));
        assert_eq!(hits[1].id, PlayerId::new("abc"));
        assert_eq!(hits[1].location_display, None);
        assert_eq!(hits[1].rating_singles, None);
        assert_eq!(hits[1].rating_doubles, None);
    }

    #[test]
    fn test_hits_without_source_dropped() {
        let hits = parse(json!({
            "players": {
                "hits": [
                    { "id": "stray" },
                    { "source": { "id": 7, "firstName": "Jo", "lastName": "Lee" } }
                ]
            }
        }));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Jo");
    }

    #[test]
    fn test_hits_without_id_dropped() {
        let hits = parse(json!({
            "players": {
                "hits": [
                    { "source": { "firstName": "Jo", "lastName": "Lee" } },
                    { "source": { "id": 8, "firstName": "Jo", "lastName": "Lee" } }
                ]
            }
        }));

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, PlayerId::new("8"));
    }

    #[test]
    fn test_missing_players_section() {
        assert!(parse(json!({ "colleges": { "hits": [] } })).is_empty());
        assert!(parse(json!({ "players": {} })).is_empty());
    }

    #[test]
    fn test_missing_names_default_to_empty() {
        let hits = parse(json!({ "players": { "hits": [ { "source": { "id": 1 } } ] } }));
        assert_eq!(hits[0].first_name, "");
        assert_eq!(hits[0].last_name, "");
    }
}
