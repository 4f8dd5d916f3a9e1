use rand::Rng;

use crate::{client::PlayerClient, error::Error, model::player::Player};

/// Cap on id draws for a single `create_player` call. The upstream id
/// spaces are sparse, so individual draws can 404; the cap turns a dead
/// universe into an error instead of an endless loop.
const MAX_LOOKUP_ATTEMPTS: u32 = 100;

/// Turns requested or random ids into players.
///
/// The total record count is resolved lazily on the first random draw and
/// memoized for the service's lifetime.
pub struct PlayerService {
    client: PlayerClient,
    player_count: Option<u32>,
}

impl PlayerService {
    /// Creates a service over the given source client.
    pub fn new(client: PlayerClient) -> Self {
        Self {
            client,
            player_count: None,
        }
    }

    /// Get a player by id, or a random player when no id is given.
    ///
    /// Ids that are missing upstream are resampled with a fresh random id,
    /// so [`Error::PlayerNotFound`] never reaches the caller. Any other
    /// failure propagates immediately. Resampling is capped at
    /// `MAX_LOOKUP_ATTEMPTS` draws.
    pub async fn create_player(&mut self, id: Option<u32>) -> Result<Player, Error> {
        let mut id = match id {
            Some(id) => id,
            None => self.random_id().await?,
        };

        for _ in 0..MAX_LOOKUP_ATTEMPTS {
            match self.client.get_by_id(id).await {
                Ok(player) => return Ok(player),
                Err(Error::PlayerNotFound(_)) => {
                    tracing::debug!(id, "no player behind id, drawing a new one");
                    id = self.random_id().await?;
                }
                Err(e) => return Err(e),
            }
        }

        Err(Error::PlayerLookupExhausted(MAX_LOOKUP_ATTEMPTS))
    }

    /// A random player from the source's full id range.
    pub async fn random_player(&mut self) -> Result<Player, Error> {
        self.create_player(None).await
    }

    /// Draw a uniformly random id in `[1, count]`, resolving and memoizing
    /// the count on first use.
    async fn random_id(&mut self) -> Result<u32, Error> {
        let count = match self.player_count {
            Some(count) => count,
            None => {
                let count = self.client.get_count().await?;
                tracing::debug!(count, "resolved player count");
                self.player_count = Some(count);
                count
            }
        };

        if count == 0 {
            // An empty collection can never produce a player
            return Err(Error::PlayerLookupExhausted(0));
        }

        Ok(rand::rng().random_range(1..=count))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::{Mock, ServerGuard};
    use serde_json::json;

    use crate::client::{RetryPolicy, SourceConfig};

    use super::*;

    fn service(server: &ServerGuard) -> PlayerService {
        let client = PlayerClient::with_retry_policy(
            SourceConfig::pokemon(&server.url()),
            RetryPolicy {
                max_attempts: 5,
                initial_backoff: Duration::ZERO,
            },
        )
        .unwrap();

        PlayerService::new(client)
    }

    fn mock_count_endpoint(
        server: &mut ServerGuard,
        count: u32,
        expected_requests: usize,
    ) -> Mock {
        server
            .mock("GET", "/api/v2/pokemon/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"count": count}).to_string())
            .expect(expected_requests)
            .create()
    }

    fn mock_player_endpoint(server: &mut ServerGuard, id: u32, name: &str) -> Mock {
        server
            .mock("GET", format!("/api/v2/pokemon/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"name": name, "weight": 67, "height": 7}).to_string())
            .create()
    }

    mod create_player {
        use super::*;

        /// Expect an explicit id to be fetched without touching the count
        /// endpoint
        #[tokio::test]
        async fn fetches_explicit_id_directly() {
            let mut server = mockito::Server::new_async().await;
            let count_endpoint = mock_count_endpoint(&mut server, 151, 0);
            let player_endpoint = mock_player_endpoint(&mut server, 5, "charmeleon");
            let mut service = service(&server);

            let player = service.create_player(Some(5)).await.unwrap();

            assert_eq!(player.id, 5);
            assert_eq!(player.name, "charmeleon");
            count_endpoint.assert();
            player_endpoint.assert();
        }

        /// Expect missing ids to be resampled until an existing player is
        /// drawn, resolving the count at most once
        #[tokio::test]
        async fn resamples_on_missing_id() {
            let mut server = mockito::Server::new_async().await;
            // Two-id universe: id 1 is a hole, id 2 exists. Draws are
            // random, so the 404 endpoint may be hit any number of times
            // (including zero) before id 2 comes up.
            let count_endpoint = mock_count_endpoint(&mut server, 2, 1);
            let missing_endpoint = server
                .mock("GET", "/api/v2/pokemon/1")
                .with_status(404)
                .expect_at_least(0)
                .create();
            let player_endpoint = mock_player_endpoint(&mut server, 2, "ivysaur");
            let mut service = service(&server);

            let player = service.random_player().await.unwrap();

            assert_eq!(player.id, 2);
            assert_eq!(player.name, "ivysaur");
            count_endpoint.assert();
            missing_endpoint.assert();
            player_endpoint.assert();
        }

        /// Expect a missing explicit id to fall back to random draws
        #[tokio::test]
        async fn resamples_after_missing_explicit_id() {
            let mut server = mockito::Server::new_async().await;
            let count_endpoint = mock_count_endpoint(&mut server, 1, 1);
            let _missing = server
                .mock("GET", "/api/v2/pokemon/9999")
                .with_status(404)
                .expect(1)
                .create();
            let player_endpoint = mock_player_endpoint(&mut server, 1, "bulbasaur");
            let mut service = service(&server);

            let player = service.create_player(Some(9999)).await.unwrap();

            assert_eq!(player.id, 1);
            count_endpoint.assert();
            player_endpoint.assert();
        }

        /// Expect non-404 failures to propagate without resampling
        #[tokio::test]
        async fn propagates_other_failures() {
            let mut server = mockito::Server::new_async().await;
            let count_endpoint = mock_count_endpoint(&mut server, 151, 0);
            let endpoint = server
                .mock("GET", "/api/v2/pokemon/1")
                .with_status(403)
                .expect(1)
                .create();
            let mut service = service(&server);

            let result = service.create_player(Some(1)).await;

            assert!(matches!(result, Err(Error::HttpStatus { .. })));
            count_endpoint.assert();
            endpoint.assert();
        }

        /// Expect the lookup to give up once the attempt cap is reached
        #[tokio::test]
        async fn gives_up_after_attempt_cap() {
            let mut server = mockito::Server::new_async().await;
            // Single-id universe whose only id is a hole: every draw 404s
            let count_endpoint = mock_count_endpoint(&mut server, 1, 1);
            let missing_endpoint = server
                .mock("GET", "/api/v2/pokemon/1")
                .with_status(404)
                .expect(100)
                .create();
            let mut service = service(&server);

            let result = service.random_player().await;

            assert!(matches!(result, Err(Error::PlayerLookupExhausted(100))));
            count_endpoint.assert();
            missing_endpoint.assert();
        }
    }
}
