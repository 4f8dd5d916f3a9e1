use crate::{error::Error, model::team::Team, service::player::PlayerService};

/// Default number of players drafted onto a team.
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// Drafts teams of random players from one source.
pub struct TeamService {
    players: PlayerService,
}

impl TeamService {
    /// Creates a team service over the given player service.
    pub fn new(players: PlayerService) -> Self {
        Self { players }
    }

    /// Assemble a team of `size` random players, in draw order.
    ///
    /// There are no partial teams: the first failure aborts assembly.
    pub async fn create_team(&mut self, size: usize) -> Result<Team, Error> {
        let mut players = Vec::with_capacity(size);

        for _ in 0..size {
            players.push(self.players.random_player().await?);
        }

        Ok(Team::new(players))
    }
}
