use anyhow::Result;

use crate::api::UtrClient;
use crate::domain::{PlayerId, PlayerRatingRecord, SearchHit};

/// Name search and rating lookup against a ratings directory
#[allow(async_fn_in_trait)]
pub trait RatingsDirectory {
    /// Search profiles by free-text name
    async fn search_players(&mut self, name: &str) -> Result<Vec<SearchHit>>;

    /// Fetch the ratings of a resolved profile
    async fn fetch_player(&mut self, id: &PlayerId, query_name: &str) -> Result<PlayerRatingRecord>;
}

impl RatingsDirectory for UtrClient {
    async fn search_players(&mut self, name: &str) -> Result<Vec<SearchHit>> {
        UtrClient::search_players(self, name).await
    }

    async fn fetch_player(&mut self, id: &PlayerId, query_name: &str) -> Result<PlayerRatingRecord> {
        UtrClient::fetch_player(self, id, query_name).await
    }
}
