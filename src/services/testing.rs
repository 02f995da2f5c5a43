use anyhow::{Result, anyhow};
use std::collections::{HashMap, HashSet};

use crate::api::RatingsDirectory;
use crate::domain::{PlayerId, PlayerRatingRecord, SearchHit};

/// In-memory directory for service tests
#[derive(Default)]
pub struct FakeDirectory {
    hits: HashMap<String, Vec<SearchHit>>,
    records: HashMap<PlayerId, PlayerRatingRecord>,
    failing_searches: HashSet<String>,
    pub fetched: Vec<PlayerId>,
}

impl FakeDirectory {
    pub fn with_hits(mut self, name: &str, hits: Vec<SearchHit>) -> Self {
        self.hits.insert(name.to_string(), hits);
        self
    }

    pub fn with_record(mut self, id: &str, record: PlayerRatingRecord) -> Self {
        self.records.insert(PlayerId::new(id), record);
        self
    }

    pub fn with_failing_search(mut self, name: &str) -> Self {
        self.failing_searches.insert(name.to_string());
        self
    }
}

impl RatingsDirectory for FakeDirectory {
    async fn search_players(&mut self, name: &str) -> Result<Vec<SearchHit>> {
        if self.failing_searches.contains(name) {
            return Err(anyhow!("search unavailable"));
        }
        Ok(self.hits.get(name).cloned().unwrap_or_default())
    }

    async fn fetch_player(&mut self, id: &PlayerId, _query_name: &str) -> Result<PlayerRatingRecord> {
        self.fetched.push(id.clone());
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("player {} not found", id))
    }
}

pub fn hit(id: &str, first: &str, last: &str, location: Option<&str>, singles: Option<f64>) -> SearchHit {
    SearchHit {
        id: PlayerId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        location_display: location.map(str::to_string),
        rating_singles: singles,
        rating_doubles: None,
    }
}

pub fn rated(name: &str, singles: f64, singles_pct: f64) -> PlayerRatingRecord {
    PlayerRatingRecord {
        display_name: name.to_string(),
        singles_rating: Some(singles),
        doubles_rating: None,
        singles_reliability_pct: Some(singles_pct),
        doubles_reliability_pct: None,
    }
}
