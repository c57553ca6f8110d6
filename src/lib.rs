//! Gaffer - Fantasy football squad optimization.
//!
//! This crate selects an optimal 15-player fantasy squad under league roster
//! rules, given per-player cost and a projected-value score. Selection is
//! formulated as a 0/1 integer linear program and solved exactly.
//!
//! # Architecture
//!
//! Two components run in sequence with no feedback loop:
//!
//! - **`domain::features`** - Feature engineering: normalized cost plus a
//!   fixture-adjusted projected value per player, derived from raw season
//!   and schedule data.
//! - **`domain::optimizer`** - Squad selection: one binary inclusion
//!   variable per player, maximizing total projected value under budget,
//!   positional-quota, and per-club-cap constraints.
//!
//! Data acquisition (fetching rosters from a remote API) and presentation
//! (dashboards, CSV export) are external collaborators; this crate only
//! consumes records in the upstream wire shape and hands back a
//! [`domain::Squad`].
//!
//! # Modules
//!
//! - [`config`] - Roster rules and configuration loading from TOML files
//! - [`domain`] - Players, fixtures, feature derivation, squad optimization
//! - [`domain::solver`] - LP/ILP solver abstraction (`HiGHSSolver` via good_lp)
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use gaffer::config::SquadRules;
//! use gaffer::domain::{derive_features, optimize_squad, SquadSolution};
//!
//! # fn run(players: Vec<gaffer::domain::PlayerRecord>, fixtures: Vec<gaffer::domain::Fixture>) -> gaffer::error::Result<()> {
//! let features = derive_features(&players, &fixtures)?;
//! let rules = SquadRules::default();
//!
//! match optimize_squad(&features, &rules)? {
//!     SquadSolution::Optimal(squad) => {
//!         println!("squad cost: {}", squad.total_cost());
//!     }
//!     SquadSolution::Infeasible => {
//!         eprintln!("no legal squad fits the budget");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
