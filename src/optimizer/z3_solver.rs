use z3::ast::{Ast, Int};
use z3::{Config, Context, Optimize, SatResult};

use crate::error::{Result, TacoError};
use crate::optimizer::program::{IntegerProgram, SolveStatus, Solver};

/// Solves integer programs with the Z3 optimizing SMT solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Z3Solver;

impl Z3Solver {
    pub fn new() -> Self {
        Self
    }
}

fn coefficient(program: &IntegerProgram, constraint: usize, var: usize) -> i64 {
    program.constraints[constraint]
        .coefficients
        .get(var)
        .copied()
        .unwrap_or(0)
}

/// Z3 answers `sat` with an arbitrary model when the objective is unbounded,
/// so unboundedness is decided structurally by looking for an improving ray.
///
/// Variable `i` with positive weight is unbounded on its own when no
/// constraint charges for it, or paired with a non-negative-weight variable
/// `j` that never costs anything and refunds every constraint charging `i`.
fn is_unbounded(program: &IntegerProgram) -> bool {
    let n = program.variables.len();
    let constraints = program.constraints.len();

    (0..n)
        .filter(|&i| program.objective.get(i).copied().unwrap_or(0) > 0)
        .any(|i| {
            let charged: Vec<usize> = (0..constraints)
                .filter(|&c| coefficient(program, c, i) > 0)
                .collect();
            if charged.is_empty() {
                return true;
            }
            (0..n).any(|j| {
                program.objective.get(j).copied().unwrap_or(0) >= 0
                    && (0..constraints).all(|c| coefficient(program, c, j) <= 0)
                    && charged.iter().all(|&c| coefficient(program, c, j) < 0)
            })
        })
}

fn weighted_sum<'ctx>(ctx: &'ctx Context, vars: &[Int<'ctx>], coefficients: &[i64]) -> Int<'ctx> {
    let terms: Vec<Int<'ctx>> = vars
        .iter()
        .zip(coefficients)
        .map(|(var, &coef)| Int::mul(ctx, &[var, &Int::from_i64(ctx, coef)]))
        .collect();
    let refs: Vec<&Int<'ctx>> = terms.iter().collect();
    Int::add(ctx, &refs)
}

impl Solver for Z3Solver {
    fn name(&self) -> &'static str {
        "z3"
    }

    fn solve(&self, program: &IntegerProgram) -> Result<SolveStatus> {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        let opt = Optimize::new(&ctx);

        let vars: Vec<Int> = program
            .variables
            .iter()
            .map(|name| Int::new_const(&ctx, name.as_str()))
            .collect();

        let zero = Int::from_i64(&ctx, 0);
        for var in &vars {
            opt.assert(&var.ge(&zero));
        }
        for c in &program.constraints {
            let lhs = weighted_sum(&ctx, &vars, &c.coefficients);
            opt.assert(&lhs.le(&Int::from_i64(&ctx, c.bound)));
        }

        let objective = weighted_sum(&ctx, &vars, &program.objective);
        opt.maximize(&objective);

        match opt.check(&[]) {
            SatResult::Unsat => Ok(SolveStatus::Infeasible),
            SatResult::Unknown => Err(TacoError::Solver("z3 returned unknown".to_string())),
            SatResult::Sat if is_unbounded(program) => Ok(SolveStatus::Unbounded),
            SatResult::Sat => {
                let model = opt
                    .get_model()
                    .ok_or_else(|| TacoError::Solver("z3 produced no model".to_string()))?;
                let assignment = vars
                    .iter()
                    .map(|var| {
                        model
                            .eval(var, true)
                            .and_then(|value| value.as_u64())
                            .ok_or_else(|| {
                                TacoError::Solver(format!("z3 left {} unassigned", var))
                            })
                    })
                    .collect::<Result<Vec<u64>>>()?;
                Ok(SolveStatus::Optimal(assignment))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::program::LinearConstraint;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("x{}", i)).collect()
    }

    #[test]
    fn test_single_variable_knapsack() {
        let program = IntegerProgram::new(names(1), vec![100])
            .with_constraint(LinearConstraint::new(vec![200], 1000));
        let status = Z3Solver::new().solve(&program).unwrap();
        assert_eq!(status, SolveStatus::Optimal(vec![5]));
    }

    #[test]
    fn test_infeasible() {
        let program = IntegerProgram::new(names(1), vec![1])
            .with_constraint(LinearConstraint::new(vec![1], -1));
        assert_eq!(
            Z3Solver::new().solve(&program).unwrap(),
            SolveStatus::Infeasible
        );
    }

    #[test]
    fn test_unbounded_detection() {
        let program = IntegerProgram::new(names(2), vec![5, 1])
            .with_constraint(LinearConstraint::new(vec![0, 3], 10));
        assert!(is_unbounded(&program));

        let bounded = IntegerProgram::new(names(2), vec![5, 0])
            .with_constraint(LinearConstraint::new(vec![2, 0], 10));
        assert!(!is_unbounded(&bounded));
    }

    #[test]
    fn test_negative_price_funds_unbounded_order() {
        // A zero-calorie item with a negative price pays for unlimited tacos
        let program = IntegerProgram::new(names(2), vec![170, 0])
            .with_constraint(LinearConstraint::new(vec![189, -50], 1000));
        assert!(is_unbounded(&program));
        assert_eq!(
            Z3Solver::new().solve(&program).unwrap(),
            SolveStatus::Unbounded
        );
    }
}
