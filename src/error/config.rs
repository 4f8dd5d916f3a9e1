use thiserror::Error;

/// Configuration errors raised while reading environment overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value is unusable.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
