use thiserror::Error;

use crate::domain::PlayerId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Malformed-input errors raised during feature derivation.
///
/// Missing or non-numeric `form` values are the one documented coercion and
/// do not error; everything else is rejected rather than defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("player {player}: position code {code} is not one of 1-4")]
    InvalidPosition { player: PlayerId, code: u8 },

    #[error("player {player}: cost {cost} must be positive")]
    InvalidCost { player: PlayerId, cost: u32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// The solving procedure failed internally (not infeasibility, which is
    /// a first-class outcome). Not worth retrying: the ILP is deterministic.
    #[error("solver fault: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
