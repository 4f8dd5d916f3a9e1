//! Shapes raw API payloads into [`Player`] records.
//!
//! The two sources disagree on field names and types: PokeAPI reports
//! numeric `weight`/`height`, SWAPI reports string-typed `mass`/`height`
//! that may hold the literal sentinel `"unknown"`. Everything downstream of
//! this module sees one record shape.

use serde::Deserialize;

use crate::{
    error::Error,
    model::player::{Player, PlayerKind},
};

/// Sentinel SWAPI uses for measures it has no data for.
const UNKNOWN: &str = "unknown";

#[derive(Debug, Deserialize)]
struct PokemonRecord {
    name: String,
    weight: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct StarWarsRecord {
    name: String,
    mass: String,
    height: String,
}

#[derive(Debug, Deserialize)]
struct CollectionPage {
    count: u32,
}

/// Shape a raw record payload into a [`Player`] for the given source.
///
/// `decimal_separator` is applied to SWAPI's locale-formatted measure
/// strings; it is carried on the source config rather than read from
/// process-global locale state.
pub fn to_player(
    kind: PlayerKind,
    id: u32,
    payload: serde_json::Value,
    decimal_separator: char,
) -> Result<Player, Error> {
    match kind {
        PlayerKind::Pokemon => {
            let record: PokemonRecord = deserialize(payload)?;

            Ok(Player {
                kind,
                id,
                name: record.name,
                weight: record.weight,
                height: record.height,
            })
        }
        PlayerKind::StarWars => {
            let record: StarWarsRecord = deserialize(payload)?;

            Ok(Player {
                kind,
                id,
                name: record.name,
                weight: parse_measure(&record.mass, decimal_separator)?,
                height: parse_measure(&record.height, decimal_separator)?,
            })
        }
    }
}

/// Extract the total record count from a collection payload.
pub fn to_count(payload: serde_json::Value) -> Result<u32, Error> {
    let page: CollectionPage = deserialize(payload)?;

    Ok(page.count)
}

fn deserialize<T>(payload: serde_json::Value) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(payload).map_err(|e| Error::ParseError(e.to_string()))
}

/// Parse a locale-formatted decimal string, mapping the `"unknown"`
/// sentinel to 0 instead of failing.
fn parse_measure(raw: &str, decimal_separator: char) -> Result<f64, Error> {
    if raw == UNKNOWN {
        return Ok(0.0);
    }

    let normalized = if decimal_separator == '.' {
        raw.to_string()
    } else {
        raw.replace(decimal_separator, ".")
    };

    normalized
        .parse::<f64>()
        .map_err(|_| Error::ParseError(format!("invalid decimal string: {raw:?}")))
}
