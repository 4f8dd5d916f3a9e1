use crate::error::config::ConfigError;

/// Default base URL for the Pokémon API.
pub const POKEAPI_URL: &str = "https://pokeapi.co";
/// Default base URL for the Star Wars API.
pub const SWAPI_URL: &str = "https://swapi.dev";

/// Runtime configuration for the team builder.
///
/// Base URLs default to the public API hosts and can be overridden through
/// the environment, which is how the test suite and local mirrors point the
/// crate at another server.
pub struct Config {
    /// Base URL for the Pokémon source.
    pub pokeapi_url: String,
    /// Base URL for the Star Wars source.
    pub swapi_url: String,
}

impl Config {
    /// Build a [`Config`] from the environment, falling back to the public
    /// API hosts when no override is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            pokeapi_url: base_url_var("POKEAPI_URL", POKEAPI_URL)?,
            swapi_url: base_url_var("SWAPI_URL", SWAPI_URL)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokeapi_url: POKEAPI_URL.to_string(),
            swapi_url: SWAPI_URL.to_string(),
        }
    }
}

fn base_url_var(var: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "base URL must not be empty".to_string(),
        }),
        Ok(value) => Ok(value.trim_end_matches('/').to_string()),
        Err(_) => Ok(default.to_string()),
    }
}
