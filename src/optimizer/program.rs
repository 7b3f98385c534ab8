use std::fmt;

use clap::ValueEnum;

use crate::error::Result;

/// `sum(coefficients[i] * x[i]) <= bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub coefficients: Vec<i64>,
    pub bound: i64,
}

impl LinearConstraint {
    pub fn new(coefficients: Vec<i64>, bound: i64) -> Self {
        Self {
            coefficients,
            bound,
        }
    }

    /// Left-hand side for an assignment, widened to avoid overflow.
    pub fn evaluate(&self, assignment: &[u64]) -> i128 {
        self.coefficients
            .iter()
            .zip(assignment)
            .map(|(&c, &x)| i128::from(c) * i128::from(x))
            .sum()
    }

    pub fn is_satisfied_by(&self, assignment: &[u64]) -> bool {
        self.evaluate(assignment) <= i128::from(self.bound)
    }
}

/// Maximize `objective · x` over non-negative integers `x`, one per variable,
/// subject to every constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerProgram {
    pub variables: Vec<String>,
    pub constraints: Vec<LinearConstraint>,
    pub objective: Vec<i64>,
}

impl IntegerProgram {
    pub fn new(variables: Vec<String>, objective: Vec<i64>) -> Self {
        Self {
            variables,
            constraints: Vec::new(),
            objective,
        }
    }

    pub fn with_constraint(mut self, constraint: LinearConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn is_feasible(&self, assignment: &[u64]) -> bool {
        assignment.len() == self.variables.len()
            && self.constraints.iter().all(|c| c.is_satisfied_by(assignment))
    }
}

/// What a backend proved about an [`IntegerProgram`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Optimal assignment, one value per variable.
    Optimal(Vec<u64>),
    Infeasible,
    Unbounded,
}

/// An external optimization engine.
pub trait Solver {
    fn name(&self) -> &'static str;

    fn solve(&self, program: &IntegerProgram) -> Result<SolveStatus>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SolverKind {
    /// Pure-Rust branch and bound via good_lp.
    Microlp,
    /// Z3 optimizing SMT solver (requires the `z3` feature).
    Z3,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Microlp => write!(f, "microlp"),
            Self::Z3 => write!(f, "z3"),
        }
    }
}
