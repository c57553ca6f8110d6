//! Optimizer output: a complete squad or an explicit infeasibility signal.

use rust_decimal::Decimal;
use serde::Serialize;

use super::features::PlayerFeatures;
use super::ids::ClubId;
use super::player::Position;

/// A selected squad. Every row from the feature table is preserved for the
/// selected players; membership is a set, order carries no meaning.
#[derive(Debug, Clone, Serialize)]
pub struct Squad {
    players: Vec<PlayerFeatures>,
}

impl Squad {
    pub(crate) fn new(players: Vec<PlayerFeatures>) -> Self {
        Self { players }
    }

    /// The selected players with all feature-table columns.
    pub fn players(&self) -> &[PlayerFeatures] {
        &self.players
    }

    /// Number of selected players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the squad is empty (never true for optimizer output).
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Combined cost of the squad in currency units.
    pub fn total_cost(&self) -> Decimal {
        self.players.iter().map(|p| p.cost).sum()
    }

    /// Combined projected value, the solved objective.
    pub fn total_projected_value(&self) -> Decimal {
        self.players.iter().map(|p| p.projected_value).sum()
    }

    /// How many selected players play the given position.
    pub fn position_count(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    /// How many selected players belong to the given club.
    pub fn club_count(&self, club: ClubId) -> usize {
        self.players.iter().filter(|p| p.club == club).count()
    }
}

/// Outcome of one optimization pass.
///
/// Infeasibility is a first-class result, distinct from solver faults: a
/// budget too low for the mandatory quotas is an answer, not an error.
#[derive(Debug, Clone, Serialize)]
pub enum SquadSolution {
    /// A squad satisfying every constraint with maximal projected value.
    Optimal(Squad),
    /// No combination of players satisfies all constraints.
    Infeasible,
}

impl SquadSolution {
    /// Whether this pass found no feasible squad.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, SquadSolution::Infeasible)
    }

    /// The squad, if one was found.
    pub fn squad(&self) -> Option<&Squad> {
        match self {
            SquadSolution::Optimal(squad) => Some(squad),
            SquadSolution::Infeasible => None,
        }
    }
}
