use std::fmt;

use crate::model::player::Player;

/// An ordered group of players with three derived role selections.
///
/// Each selection is computed on first access and memoized for the team's
/// lifetime. Selections sort stably, so players tied on the sort key keep
/// their draw order.
#[derive(Debug, Clone)]
pub struct Team {
    players: Vec<Player>,
    goalie: Option<Player>,
    defense: Option<Vec<Player>>,
    offense: Option<Vec<Player>>,
}

impl Team {
    /// Creates a team over the given players, in draw order.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            goalie: None,
            defense: None,
            offense: None,
        }
    }

    /// All players on the team, in draw order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The tallest player, or `None` for an empty team.
    pub fn goalie(&mut self) -> Option<&Player> {
        if self.goalie.is_none() {
            let mut by_height = self.players.clone();
            by_height.sort_by(|a, b| b.height.total_cmp(&a.height));
            self.goalie = by_height.into_iter().next();
        }

        self.goalie.as_ref()
    }

    /// The two heaviest players, heaviest first.
    pub fn defense(&mut self) -> &[Player] {
        let players = &self.players;

        self.defense.get_or_insert_with(|| {
            let mut by_weight = players.clone();
            by_weight.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            by_weight.truncate(2);
            by_weight
        })
    }

    /// The two shortest players, shortest first.
    pub fn offense(&mut self) -> &[Player] {
        let players = &self.players;

        self.offense.get_or_insert_with(|| {
            let mut by_height = players.clone();
            by_height.sort_by(|a, b| a.height.total_cmp(&b.height));
            by_height.truncate(2);
            by_height
        })
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team(players=[")?;
        for (i, player) in self.players.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{player}")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use crate::model::player::PlayerKind;

    use super::*;

    fn player(id: u32, weight: f64, height: f64) -> Player {
        Player {
            kind: PlayerKind::Pokemon,
            id,
            name: format!("player-{id}"),
            weight,
            height,
        }
    }

    /// Five players with heights [7, 7, 9, 3, 17] and weights
    /// [160, 1128, 216, 10, 155], ids 1 through 5 in draw order.
    fn sample_team() -> Team {
        Team::new(vec![
            player(1, 160.0, 7.0),
            player(2, 1128.0, 7.0),
            player(3, 216.0, 9.0),
            player(4, 10.0, 3.0),
            player(5, 155.0, 17.0),
        ])
    }

    mod goalie {
        use super::*;

        /// Expect the tallest player to be picked as goalie
        #[test]
        fn picks_tallest_player() {
            let mut team = sample_team();

            let goalie = team.goalie().expect("team is not empty");

            assert_eq!(goalie.id, 5);
            assert_eq!(goalie.height, 17.0);
        }

        /// Expect a height tie to resolve to the earlier draw
        #[test]
        fn breaks_ties_by_draw_order() {
            let mut team = Team::new(vec![
                player(1, 10.0, 7.0),
                player(2, 20.0, 7.0),
            ]);

            assert_eq!(team.goalie().expect("team is not empty").id, 1);
        }

        /// Expect None for an empty team
        #[test]
        fn returns_none_for_empty_team() {
            let mut team = Team::new(Vec::new());

            assert!(team.goalie().is_none());
        }

        /// Expect repeated access to return the memoized selection
        #[test]
        fn memoizes_selection() {
            let mut team = sample_team();

            let first = team.goalie().expect("team is not empty").clone();
            let second = team.goalie().expect("team is not empty").clone();

            assert_eq!(first, second);
        }
    }

    mod defense {
        use super::*;

        /// Expect the two heaviest players, heaviest first
        #[test]
        fn picks_two_heaviest_players() {
            let mut team = sample_team();

            let defense = team.defense();

            assert_eq!(defense.len(), 2);
            assert_eq!(defense[0].weight, 1128.0);
            assert_eq!(defense[1].weight, 216.0);
        }

        /// Expect a short team to yield fewer than two defenders
        #[test]
        fn truncates_for_small_teams() {
            let mut team = Team::new(vec![player(1, 10.0, 7.0)]);

            assert_eq!(team.defense().len(), 1);
        }
    }

    mod offense {
        use super::*;

        /// Expect the two shortest players, shortest first, ties resolved
        /// by draw order
        #[test]
        fn picks_two_shortest_players() {
            let mut team = sample_team();

            let offense = team.offense();

            assert_eq!(offense.len(), 2);
            assert_eq!(offense[0].height, 3.0);
            // Both remaining candidates are height 7; the earlier draw wins
            assert_eq!(offense[1].id, 1);
        }
    }

    /// Expect the team to render its players in draw order
    #[test]
    fn formats_team_with_players() {
        let team = Team::new(vec![
            player(1, 67.0, 7.0),
            player(2, 60.0, 10.0),
        ]);

        assert_eq!(
            team.to_string(),
            "Team(players=[Pokemon(id=1,name=player-1,weight=67,height=7), \
             Pokemon(id=2,name=player-2,weight=60,height=10)])"
        );
    }
}
