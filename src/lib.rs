//! Fantasy team assembly from two public character APIs.
//!
//! This crate drafts small teams of Pokémon and Star Wars characters by
//! fetching random records from PokeAPI and SWAPI, normalizing the two
//! payload shapes into one player record, and caching fetched players per
//! source so repeated lookups never touch the network. Team roles (goalie,
//! defense, offense) are derived from player height and weight.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
