//! League roster rules and configuration loading.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::Position;
use crate::error::{ConfigError, Result};

/// Roster rules for one optimization pass.
///
/// Defaults match the standard league: a 100.0 budget, 15 players split
/// 2 GK / 5 DEF / 5 MID / 3 FWD, at most 3 per club. The budget is the
/// usual knob; the upstream tooling exposes it over an 80-120 range.
#[derive(Debug, Clone, Deserialize)]
pub struct SquadRules {
    /// Total budget in currency units.
    #[serde(default = "default_budget")]
    pub budget: Decimal,

    /// Exact number of players to select.
    #[serde(default = "default_squad_size")]
    pub squad_size: u32,

    #[serde(default = "default_goalkeepers")]
    pub goalkeepers: u32,

    #[serde(default = "default_defenders")]
    pub defenders: u32,

    #[serde(default = "default_midfielders")]
    pub midfielders: u32,

    #[serde(default = "default_forwards")]
    pub forwards: u32,

    /// Maximum players selectable from any single club.
    #[serde(default = "default_max_per_club")]
    pub max_per_club: u32,
}

fn default_budget() -> Decimal {
    dec!(100.0)
}

fn default_squad_size() -> u32 {
    15
}

fn default_goalkeepers() -> u32 {
    2
}

fn default_defenders() -> u32 {
    5
}

fn default_midfielders() -> u32 {
    5
}

fn default_forwards() -> u32 {
    3
}

fn default_max_per_club() -> u32 {
    3
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            squad_size: default_squad_size(),
            goalkeepers: default_goalkeepers(),
            defenders: default_defenders(),
            midfielders: default_midfielders(),
            forwards: default_forwards(),
            max_per_club: default_max_per_club(),
        }
    }
}

impl SquadRules {
    /// Default rules with a caller-chosen budget.
    pub fn with_budget(budget: Decimal) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// The exact quota for a position.
    pub fn quota(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.budget <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "budget",
                reason: format!("must be positive, got {}", self.budget),
            });
        }
        if self.squad_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "squad_size",
                reason: "must be at least 1".into(),
            });
        }
        let quota_sum: u32 = Position::ALL.iter().map(|&p| self.quota(p)).sum();
        if quota_sum != self.squad_size {
            return Err(ConfigError::InvalidValue {
                field: "squad_size",
                reason: format!(
                    "positional quotas sum to {quota_sum}, expected {}",
                    self.squad_size
                ),
            });
        }
        if self.max_per_club == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_per_club",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Top-level configuration, loadable from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rules: SquadRules,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.rules.validate()?;

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }
        Ok(())
    }
}
