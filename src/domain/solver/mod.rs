//! Solver abstraction for integer linear programming.
//!
//! Squad selection needs an exact 0/1 ILP solve: the quota, club-cap, and
//! budget constraints interact combinatorially and no greedy heuristic is
//! guaranteed optimal. The [`Solver`] trait keeps the optimizer independent
//! of the backing implementation; [`HiGHSSolver`] is the reference backend.

mod highs;

pub use highs::HiGHSSolver;

use rust_decimal::Decimal;

use crate::error::Result;

/// Direction of one linear constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

/// One dense linear constraint: `coefficients . x  <sense>  rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub coefficients: Vec<Decimal>,
    pub sense: ConstraintSense,
    pub rhs: Decimal,
}

impl Constraint {
    pub fn leq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    pub fn geq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    pub fn eq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }
}

/// Box constraints on a single variable. `None` means unbounded on that side.
#[derive(Debug, Clone)]
pub struct VariableBounds {
    pub lower: Option<Decimal>,
    pub upper: Option<Decimal>,
}

impl VariableBounds {
    /// `0 <= x <= 1`, the relaxation of a binary variable.
    pub fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    pub fn bounded(lower: Decimal, upper: Decimal) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }
}

/// A linear program in minimization form.
///
/// The objective is minimized; callers wanting a maximum negate their
/// coefficients.
#[derive(Debug, Clone)]
pub struct LpProblem {
    pub objective: Vec<Decimal>,
    pub constraints: Vec<Constraint>,
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// An integer program: an LP plus the set of variables required integral.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    pub lp: LpProblem,
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Mark every variable integral (with binary bounds this is a 0/1 ILP).
    pub fn all_binary(lp: LpProblem) -> Self {
        let integer_vars = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Status of a completed solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    Optimal,
    Infeasible,
}

/// Result of a solve: variable values and the objective as solved.
#[derive(Debug, Clone)]
pub struct LpSolution {
    pub values: Vec<Decimal>,
    pub objective: Decimal,
    pub status: SolutionStatus,
}

impl LpSolution {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// An exact ILP solver.
///
/// Implementations must report infeasibility via [`SolutionStatus::Infeasible`]
/// and reserve the error channel for internal faults, never conflating the two.
pub trait Solver: Send + Sync {
    /// Backend identifier for logging.
    fn name(&self) -> &'static str;

    /// Solve the ILP to proven optimality or proven infeasibility.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn all_binary_marks_every_variable() {
        let lp = LpProblem {
            objective: vec![Decimal::ONE, Decimal::ONE, Decimal::ONE],
            constraints: vec![],
            bounds: vec![VariableBounds::binary(); 3],
        };
        let ilp = IlpProblem::all_binary(lp);
        assert_eq!(ilp.integer_vars, vec![0, 1, 2]);
    }

    #[test]
    fn constraint_constructors_set_sense() {
        let leq = Constraint::leq(vec![Decimal::ONE], dec!(3));
        let geq = Constraint::geq(vec![Decimal::ONE], dec!(3));
        let eq = Constraint::eq(vec![Decimal::ONE], dec!(3));

        assert_eq!(leq.sense, ConstraintSense::LessEqual);
        assert_eq!(geq.sense, ConstraintSense::GreaterEqual);
        assert_eq!(eq.sense, ConstraintSense::Equal);
    }
}
