use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{fetch_context, parse_context};
use crate::rate_limiter::RateLimiter;

/// HTTP client with built-in rate limiting and optional bearer auth
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
    bearer_token: Option<String>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
            bearer_token: None,
        })
    }

    /// Attach `Authorization: Bearer <token>` to every following request
    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub async fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        let request = self.client.get(url);
        self.send_json(request, url).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&mut self, url: &str, body: &B) -> Result<T> {
        let request = self.client.post(url).json(body);
        self.send_json(request, url).await
    }

    pub fn request_count(&self) -> usize {
        self.rate_limiter.request_count()
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_json<T: DeserializeOwned>(&mut self, request: RequestBuilder, url: &str) -> Result<T> {
        self.rate_limiter.wait().await;

        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        debug!("Requesting {}", url);
        let response = request.send().await.with_context(|| fetch_context(url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "{}: API returned status {} ({})",
                fetch_context(url),
                status,
                body.chars().take(200).collect::<String>()
            );
        }

        response
            .json::<T>()
            .await
            .with_context(|| parse_context(&format!("response from {}", url)))
    }
}
