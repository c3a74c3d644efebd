//! HTTP client for the superhero REST API
//!
//! Uses async reqwest for non-blocking requests. The base URL is a field so
//! tests can point the client at a mock server.

use crate::error::{HeroError, HeroResult};
use crate::models::{Hero, HeroPage};

/// Production API base URL
pub const DEFAULT_API_URL: &str = "https://ea1w717ym2.execute-api.us-east-1.amazonaws.com/api";

const USER_AGENT: &str = "Herodex/1.0";

/// Client for the two hero endpoints
#[derive(Debug, Clone)]
pub struct HeroApi {
    client: reqwest::Client,
    base_url: String,
}

impl HeroApi {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of heroes: `GET {base}/heroes?page={page}&size={size}`
    pub async fn fetch_heroes(&self, page: u32, size: u32) -> HeroResult<HeroPage> {
        let url = format!("{}/heroes", self.base_url);

        log::debug!("Fetching hero list: page={} size={}", page, size);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("size", size)])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<HeroPage>().await?)
        } else {
            Err(HeroError::HttpStatus(response.status()))
        }
    }

    /// Fetch a single hero: `GET {base}/hero?id={id}`
    pub async fn fetch_hero(&self, id: u32) -> HeroResult<Hero> {
        let url = format!("{}/hero", self.base_url);

        log::debug!("Fetching hero detail: id={}", id);

        let response = self
            .client
            .get(&url)
            .query(&[("id", id)])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<Hero>().await?)
        } else {
            Err(HeroError::HttpStatus(response.status()))
        }
    }
}

impl Default for HeroApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
