use std::fmt;

/// Which external API a player record came from.
///
/// Both sources share one record shape; the kind only determines how a
/// player renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Record fetched from PokeAPI.
    Pokemon,
    /// Record fetched from SWAPI.
    StarWars,
}

/// A single character record, normalized from either API.
///
/// Players are immutable once created: the normalizer builds them and the
/// per-source cache hands out clones of the same record forever after.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Source the record came from.
    pub kind: PlayerKind,
    /// Upstream id, always >= 1.
    pub id: u32,
    /// Character name as reported upstream.
    pub name: String,
    /// Weight (PokeAPI hectograms / SWAPI kilograms); 0 when unknown.
    pub weight: f64,
    /// Height (PokeAPI decimetres / SWAPI centimetres); 0 when unknown.
    pub height: f64,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PlayerKind::Pokemon => "Pokemon",
            PlayerKind::StarWars => "StarWars",
        };

        write!(
            f,
            "{}(id={},name={},weight={},height={})",
            kind, self.id, self.name, self.weight, self.height
        )
    }
}
