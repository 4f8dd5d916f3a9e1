//! Service layer for player acquisition and team assembly.
//!
//! Services sit on top of the HTTP client: the player service turns random
//! ids into players while absorbing missing-id responses, and the team
//! service drafts a full team from repeated random draws.

pub mod player;
pub mod team;
