use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use log::trace;

use crate::error::{Result, TacoError};
use crate::optimizer::program::{IntegerProgram, SolveStatus, Solver};

/// microlp saturates integer variables here, so a value at this bound is not
/// a real optimum.
const MAX_INTEGER_VALUE: f64 = i32::MAX as f64;

/// Solves integer programs with good_lp's pure-Rust `microlp` backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn linear_expression(vars: &[Variable], coefficients: &[i64]) -> Expression {
    vars.iter()
        .zip(coefficients)
        .map(|(&var, &coef)| coef as f64 * var)
        .sum()
}

impl Solver for MicroLpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, program: &IntegerProgram) -> Result<SolveStatus> {
        let mut problem = ProblemVariables::new();
        let vars: Vec<Variable> = program
            .variables
            .iter()
            .map(|name| problem.add(variable().integer().min(0).name(name.as_str())))
            .collect();

        let objective = linear_expression(&vars, &program.objective);
        let mut model = problem.maximise(objective).using(microlp);
        for c in &program.constraints {
            let lhs = linear_expression(&vars, &c.coefficients);
            let bound = c.bound as f64;
            model = model.with(constraint!(lhs <= bound));
        }

        let solution = match model.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(SolveStatus::Infeasible),
            Err(ResolutionError::Unbounded) => return Ok(SolveStatus::Unbounded),
            Err(e) => return Err(TacoError::Solver(e.to_string())),
        };

        let assignment = vars
            .iter()
            .map(|&var| {
                let value = solution.value(var);
                trace!("microlp raw value {}", value);
                if value >= MAX_INTEGER_VALUE {
                    return Err(TacoError::Solver(format!(
                        "quantity exceeds backend range: {}",
                        value
                    )));
                }
                Ok(value.round().max(0.0) as u64)
            })
            .collect::<Result<Vec<u64>>>()?;

        Ok(SolveStatus::Optimal(assignment))
    }
}
