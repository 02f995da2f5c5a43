use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::models::{LoginRequest, LoginResponse, PlayerResponse, SearchResponse};
use crate::api::parsers;
use crate::config::{ApiSettings, Credentials};
use crate::domain::{PlayerId, PlayerRatingRecord, SearchHit};
use crate::http::RateLimitedClient;

/// Client for the UTR ratings directory
pub struct UtrClient {
    client: RateLimitedClient,
    base_url: String,
}

impl UtrClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(settings.user_agent, settings.timeout_secs, settings.rate_limit_ms)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Log in and keep the returned token for all further calls
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        info!("Logging in as {}", credentials.email);

        let url = self.build_login_url();
        let body = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        let response: LoginResponse = self
            .client
            .post_json(&url, &body)
            .await
            .context("Login request failed")?;

        let token = take_token(response)?;
        self.client.set_bearer_token(token);
        Ok(())
    }

    /// Search profiles by free-text name
    pub async fn search_players(&mut self, name: &str) -> Result<Vec<SearchHit>> {
        let url = self.build_search_url(name);
        let response: SearchResponse = self
            .client
            .get_json(&url)
            .await
            .with_context(|| format!("Search for {} failed", name))?;

        let hits = parsers::extract_hits(response);
        debug!("Search for {} returned {} hits", name, hits.len());
        Ok(hits)
    }

    /// Fetch the ratings of one profile
    pub async fn fetch_player(&mut self, id: &PlayerId, query_name: &str) -> Result<PlayerRatingRecord> {
        let url = self.build_player_url(id);
        let response: PlayerResponse = self
            .client
            .get_json(&url)
            .await
            .with_context(|| format!("Rating lookup for player ID {} failed", id))?;

        let record = parsers::to_rating_record(response, query_name);
        debug!(
            "Fetched ratings for ID {}: Singles: {:?}, Doubles: {:?}",
            id, record.singles_rating, record.doubles_rating
        );
        Ok(record)
    }

    pub fn request_count(&self) -> usize {
        self.client.request_count()
    }

    // --- Helper Methods ---

    fn build_login_url(&self) -> String {
        format!("{}/api/v2/auth/login", self.base_url)
    }

    fn build_search_url(&self, name: &str) -> String {
        format!("{}/api/v2/search?query={}", self.base_url, urlencoding::encode(name))
    }

    fn build_player_url(&self, id: &PlayerId) -> String {
        format!("{}/api/v2/player/{}", self.base_url, urlencoding::encode(id.as_str()))
    }
}

/// A login without a non-empty token is a failed login
fn take_token(response: LoginResponse) -> Result<String> {
    response
        .token
        .filter(|t| !t.is_empty())
        .context("Login response did not contain a token")
}
