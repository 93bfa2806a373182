//! Error types for session setup and body placement

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// No free spot was found for a new body.
    #[error("arena full: no free spot found after {attempts} placement attempts")]
    ArenaFull { attempts: u32 },
    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}
