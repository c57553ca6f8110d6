//! Squad selection as a 0/1 integer linear program.
//!
//! One binary inclusion variable per candidate; maximize total projected
//! value subject to the budget, exact positional quotas, exact squad size,
//! and the per-club cap. The model is handed to an exact [`Solver`], so a
//! returned squad is a proven optimum, never a heuristic.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::features::PlayerFeatures;
use super::ids::ClubId;
use super::player::Position;
use super::solver::{Constraint, HiGHSSolver, IlpProblem, LpProblem, Solver, VariableBounds};
use super::squad::{Squad, SquadSolution};
use crate::config::SquadRules;
use crate::error::{Error, Result};

/// Pick the optimal squad with the reference HiGHS backend.
///
/// One synchronous, deterministic solve per call; no state is shared
/// between calls. When several squads tie on projected value the choice
/// among them is decided by HiGHS's branch-and-bound ordering.
pub fn optimize_squad(features: &[PlayerFeatures], rules: &SquadRules) -> Result<SquadSolution> {
    optimize_squad_with(&HiGHSSolver::new(), features, rules)
}

/// Pick the optimal squad with a caller-supplied [`Solver`].
///
/// The contract is solver-independent: either every constraint holds
/// exactly and the objective is maximal, or the result is
/// [`SquadSolution::Infeasible`]. Solver-internal failures surface as
/// [`Error::Solver`] and are never reported as infeasibility.
pub fn optimize_squad_with<S: Solver>(
    solver: &S,
    features: &[PlayerFeatures],
    rules: &SquadRules,
) -> Result<SquadSolution> {
    rules.validate()?;

    if features.is_empty() {
        warn!("candidate pool is empty, squad is trivially infeasible");
        return Ok(SquadSolution::Infeasible);
    }

    let n = features.len();
    let clubs: BTreeSet<ClubId> = features.iter().map(|p| p.club).collect();

    debug!(
        solver = solver.name(),
        candidates = n,
        clubs = clubs.len(),
        budget = %rules.budget,
        "building squad selection ILP"
    );

    // Minimization form: negate to maximize total projected value.
    let objective: Vec<Decimal> = features.iter().map(|p| -p.projected_value).collect();

    let mut constraints = Vec::with_capacity(2 + Position::ALL.len() + clubs.len());

    constraints.push(Constraint::leq(
        features.iter().map(|p| p.cost).collect(),
        rules.budget,
    ));

    constraints.push(Constraint::eq(
        vec![Decimal::ONE; n],
        Decimal::from(rules.squad_size),
    ));

    for position in Position::ALL {
        constraints.push(Constraint::eq(
            indicator(features, |p| p.position == position),
            Decimal::from(rules.quota(position)),
        ));
    }

    for &club in &clubs {
        constraints.push(Constraint::leq(
            indicator(features, |p| p.club == club),
            Decimal::from(rules.max_per_club),
        ));
    }

    let ilp = IlpProblem::all_binary(LpProblem {
        objective,
        constraints,
        bounds: vec![VariableBounds::binary(); n],
    });

    let solution = solver.solve_ilp(&ilp)?;

    if !solution.is_optimal() {
        warn!(budget = %rules.budget, "no feasible squad for these rules");
        return Ok(SquadSolution::Infeasible);
    }

    let selected: Vec<PlayerFeatures> = features
        .iter()
        .zip(solution.values.iter())
        .filter(|(_, &x)| x > Decimal::new(5, 1))
        .map(|(p, _)| p.clone())
        .collect();

    // The solve reported optimal, so the size constraint must bind exactly.
    if selected.len() != rules.squad_size as usize {
        return Err(Error::Solver(format!(
            "solver returned {} selections, expected {}",
            selected.len(),
            rules.squad_size
        )));
    }

    let squad = Squad::new(selected);
    info!(
        players = squad.len(),
        cost = %squad.total_cost(),
        objective = %squad.total_projected_value(),
        "optimal squad found"
    );

    Ok(SquadSolution::Optimal(squad))
}

fn indicator<F>(features: &[PlayerFeatures], predicate: F) -> Vec<Decimal>
where
    F: Fn(&PlayerFeatures) -> bool,
{
    features
        .iter()
        .map(|p| {
            if predicate(p) {
                Decimal::ONE
            } else {
                Decimal::ZERO
            }
        })
        .collect()
}
