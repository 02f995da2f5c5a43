use anyhow::Result;
use log::info;

use crate::api::RatingsDirectory;
use crate::config::AreaSettings;
use crate::domain::{NameQuery, PlayerId};
use crate::matching::{ResolutionTier, ScoredCandidate, score_candidates, select};

/// How one name was matched: every compatible candidate and the pick
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionReport {
    pub query: NameQuery,
    pub total_hits: usize,
    pub candidates: Vec<ScoredCandidate>,
    pub selected: Option<(PlayerId, ResolutionTier)>,
}

/// Explains the matching of a single name
pub struct ResolutionService<D> {
    directory: D,
    area: AreaSettings,
}

impl<D: RatingsDirectory> ResolutionService<D> {
    pub fn new(directory: D, area: AreaSettings) -> Self {
        Self { directory, area }
    }

    pub async fn explain(&mut self, name: &str) -> Result<ResolutionReport> {
        let query = NameQuery::parse(name);
        let hits = self.directory.search_players(query.full_name()).await?;
        let candidates = score_candidates(&query, &hits);

        let selected = select(&candidates, self.area.home_area())
            .map(|resolution| (resolution.candidate.id().clone(), resolution.tier));

        info!(
            "{}: {} hits, {} name-compatible candidates",
            query.full_name(),
            hits.len(),
            candidates.len()
        );

        Ok(ResolutionReport {
            query,
            total_hits: hits.len(),
            candidates,
            selected,
        })
    }
}
