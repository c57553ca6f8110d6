//! Roster-agnostic domain logic: players, fixtures, features, optimization.

mod features;
mod fixture;
mod ids;
mod optimizer;
mod player;
mod squad;

pub mod solver;

// Core domain types
pub use ids::{ClubId, PlayerId};
pub use player::{PlayerRecord, Position};

// Fixtures and feature engineering
pub use features::{derive_features, PlayerFeatures, FIXTURE_HORIZON};
pub use fixture::Fixture;

// Optimization
pub use optimizer::{optimize_squad, optimize_squad_with};
pub use squad::{Squad, SquadSolution};
