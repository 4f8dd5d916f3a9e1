//! HTTP client for the two character APIs.
//!
//! One parameterized [`PlayerClient`] covers both sources; the differences
//! live entirely in [`SourceConfig`]. Status codes are interpreted in a
//! single place: 404 becomes [`Error::PlayerNotFound`], other non-success
//! statuses become [`Error::HttpStatus`], and transient failures are
//! retried with exponential backoff before surfacing.

pub mod cache;
pub mod normalize;

use std::time::Duration;

use crate::{
    client::cache::PlayerCache,
    config::Config,
    error::{retry::ErrorRetryStrategy, Error},
    model::player::{Player, PlayerKind},
};

/// Connection establishment timeout. The upstream APIs set no expectations
/// here, so the client supplies its own bound rather than waiting forever.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Whole-request timeout, covering the body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source-specific wiring for one external API.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Which record shape this source serves.
    pub kind: PlayerKind,
    /// Scheme + host, without a trailing slash.
    pub base_url: String,
    /// Collection path under the base URL, without surrounding slashes.
    pub resource_path: &'static str,
    /// Decimal separator for locale-formatted measure strings.
    pub decimal_separator: char,
}

impl SourceConfig {
    /// PokeAPI wiring against the given base URL.
    pub fn pokemon(base_url: &str) -> Self {
        Self {
            kind: PlayerKind::Pokemon,
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: "api/v2/pokemon",
            decimal_separator: '.',
        }
    }

    /// SWAPI wiring against the given base URL.
    pub fn star_wars(base_url: &str) -> Self {
        Self {
            kind: PlayerKind::StarWars,
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: "api/people",
            decimal_separator: '.',
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}/", self.base_url, self.resource_path)
    }

    fn record_url(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, self.resource_path, id)
    }
}

/// Retry policy applied to every request a client makes.
///
/// Fixed per client, not configurable per call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts before a transient failure surfaces.
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles on each further retry.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_secs(1),
        }
    }
}

/// HTTP requestor for one source, with its cache and retry policy.
pub struct PlayerClient {
    http: reqwest::Client,
    source: SourceConfig,
    retry: RetryPolicy,
    cache: PlayerCache,
}

impl PlayerClient {
    /// Creates a client for the given source with the default retry policy.
    pub fn new(source: SourceConfig) -> Result<Self, Error> {
        Self::with_retry_policy(source, RetryPolicy::default())
    }

    /// Creates a client with an explicit retry policy.
    pub fn with_retry_policy(source: SourceConfig, retry: RetryPolicy) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            source,
            retry,
            cache: PlayerCache::new(),
        })
    }

    /// PokeAPI client wired from the configuration.
    pub fn pokemon(config: &Config) -> Result<Self, Error> {
        Self::new(SourceConfig::pokemon(&config.pokeapi_url))
    }

    /// SWAPI client wired from the configuration.
    pub fn star_wars(config: &Config) -> Result<Self, Error> {
        Self::new(SourceConfig::star_wars(&config.swapi_url))
    }

    /// Get a player by upstream id, from cache when possible.
    ///
    /// A cache hit returns immediately with zero network calls. On a miss
    /// the record is fetched, normalized, and cached. A 404 fails with
    /// [`Error::PlayerNotFound`] and leaves the cache untouched.
    pub async fn get_by_id(&mut self, id: u32) -> Result<Player, Error> {
        if let Some(player) = self.cache.get(id) {
            tracing::debug!(id, "player cache hit");
            return Ok(player.clone());
        }

        let url = self.source.record_url(id);
        let payload = self.request(&url, Some(id)).await?;
        let player = normalize::to_player(
            self.source.kind,
            id,
            payload,
            self.source.decimal_separator,
        )?;

        self.cache.insert(id, player.clone());

        Ok(player)
    }

    /// Total number of records upstream. Always a network call, never
    /// cached, since the collection can grow between calls.
    pub async fn get_count(&self) -> Result<u32, Error> {
        let payload = self.request(&self.source.collection_url(), None).await?;

        normalize::to_count(payload)
    }

    /// Issue a GET with the client's retry policy and return the JSON body.
    async fn request(&self, url: &str, id: Option<u32>) -> Result<serde_json::Value, Error> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.request_once(url, id).await {
                Ok(payload) => return Ok(payload),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => return Err(e),
                    ErrorRetryStrategy::Retry => {
                        if attempt >= self.retry.max_attempts {
                            tracing::error!(
                                error = %e,
                                url,
                                attempts = attempt,
                                "request failed after retries"
                            );
                            return Err(e);
                        }

                        let backoff = self.retry.initial_backoff * 2_u32.pow(attempt - 1);

                        tracing::warn!(
                            error = %e,
                            url,
                            attempt,
                            max_attempts = self.retry.max_attempts,
                            backoff_ms = backoff.as_millis() as u64,
                            "retrying request"
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }

    /// Single request with status mapping. This is the only place status
    /// codes are interpreted; `id` marks record lookups, where a 404 is the
    /// missing-player domain signal rather than a transport problem.
    async fn request_once(&self, url: &str, id: Option<u32>) -> Result<serde_json::Value, Error> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(Error::PlayerNotFound(id));
            }
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let payload = response.json::<serde_json::Value>().await?;

        Ok(payload)
    }
}
