use std::collections::HashMap;

use crate::model::player::Player;

/// In-memory player cache keyed by upstream id.
///
/// Entries are inserted on first successful fetch and never evicted or
/// updated, so a cached id always resolves to the identical record. The
/// cache is reached through `&mut` on the owning client; there is no
/// locking. Growth is unbounded, which is fine for the small id spaces
/// involved but would need revisiting in a long-lived process.
#[derive(Debug, Clone, Default)]
pub struct PlayerCache {
    players: HashMap<u32, Player>,
}

impl PlayerCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached player. Absence is a miss, not an error.
    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Store a fetched player under its id.
    pub fn insert(&mut self, id: u32, player: Player) {
        self.players.insert(id, player);
    }
}
