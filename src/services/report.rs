use log::{debug, info, warn};

use crate::api::RatingsDirectory;
use crate::config::{AreaSettings, TeamConfig};
use crate::domain::{LookupProgress, NameQuery, PlayerRatingRecord, TeamReport};
use crate::matching::{resolve, score_candidates};
use crate::rating::aggregate;

/// Resolves every member of a team and folds their ratings into averages
pub struct ReportService<D> {
    directory: D,
    area: AreaSettings,
}

impl<D: RatingsDirectory> ReportService<D> {
    pub fn new(directory: D, area: AreaSettings) -> Self {
        Self { directory, area }
    }

    /// Look up all members, then aggregate once every lookup has finished
    pub async fn build_team_report(&mut self, team: &TeamConfig) -> TeamReport {
        info!("Processing team {} ({} players)", team.name, team.players.len());

        let mut progress = LookupProgress::new(&team.name, team.players.len());
        let mut players = Vec::with_capacity(team.players.len());

        for name in &team.players {
            let record = self.lookup_player(name, &mut progress).await;
            players.push(record);
        }

        info!(
            "Team {}: {} of {} players resolved",
            team.name,
            progress.resolved(),
            team.players.len()
        );

        let summary = aggregate(&players);
        TeamReport {
            name: team.name.clone(),
            players,
            summary,
        }
    }

    pub fn into_directory(self) -> D {
        self.directory
    }

    async fn lookup_player(&mut self, name: &str, progress: &mut LookupProgress) -> PlayerRatingRecord {
        let query = NameQuery::parse(name);

        let hits = match self.directory.search_players(query.full_name()).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Error searching for player {}: {:#}", name, e);
                progress.increment_failed();
                return PlayerRatingRecord::unresolved(name);
            }
        };

        let candidates = score_candidates(&query, &hits);
        if candidates.is_empty() {
            debug!("No players found for {}", name);
        }

        let identity = resolve(&candidates, self.area.home_area());
        let Some(id) = identity.id() else {
            progress.increment_unresolved();
            return PlayerRatingRecord::unresolved(name);
        };

        match self.directory.fetch_player(id, name).await {
            Ok(record) => {
                progress.increment_resolved();
                record
            }
            Err(e) => {
                warn!("Error fetching ratings for player ID {}: {:#}", id, e);
                progress.increment_failed();
                PlayerRatingRecord::unresolved(name)
            }
        }
    }
}
