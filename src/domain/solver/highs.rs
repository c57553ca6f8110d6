//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming
//! solver. This implementation wraps it using the good_lp crate for
//! ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{ConstraintSense, IlpProblem, LpSolution, SolutionStatus, Solver};
use crate::error::{Error, Result};

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        let lp = &problem.lp;
        let n = lp.num_vars();

        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);

        for (i, bounds) in lp.bounds.iter().enumerate() {
            let mut v = variable();

            if let Some(lb) = bounds.lower {
                v = v.min(lb.to_f64().unwrap_or(0.0));
            }
            if let Some(ub) = bounds.upper {
                v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
            }
            if problem.integer_vars.contains(&i) {
                v = v.integer();
            }

            var_list.push(vars.add(v));
        }

        let objective: Expression = var_list
            .iter()
            .zip(lp.objective.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let mut model = vars.minimise(&objective).using(highs);

        for constr in &lp.constraints {
            let lhs: Expression = var_list
                .iter()
                .zip(constr.coefficients.iter())
                .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
                .sum();

            let rhs = constr.rhs.to_f64().unwrap_or(0.0);

            match constr.sense {
                ConstraintSense::GreaterEqual => {
                    model = model.with(constraint!(lhs >= rhs));
                }
                ConstraintSense::LessEqual => {
                    model = model.with(constraint!(lhs <= rhs));
                }
                ConstraintSense::Equal => {
                    model = model.with(constraint!(lhs == rhs));
                }
            }
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<Decimal> = var_list
                    .iter()
                    .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                    .collect();

                // Re-evaluate the objective with the solved values.
                let obj_value: f64 = values
                    .iter()
                    .zip(lp.objective.iter())
                    .map(|(v, c)| v.to_f64().unwrap_or(0.0) * c.to_f64().unwrap_or(0.0))
                    .sum();

                Ok(LpSolution {
                    values,
                    objective: Decimal::try_from(obj_value).unwrap_or(Decimal::ZERO),
                    status: SolutionStatus::Optimal,
                })
            }
            // Infeasibility is an answer; every other failure is a fault.
            Err(ResolutionError::Infeasible) => Ok(LpSolution {
                values: vec![Decimal::ZERO; n],
                objective: Decimal::ZERO,
                status: SolutionStatus::Infeasible,
            }),
            Err(err) => Err(Error::Solver(err.to_string())),
        }
    }
}
