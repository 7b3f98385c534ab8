pub mod calories;
pub mod microlp;
pub mod money;
pub mod program;
#[cfg(feature = "z3")]
pub mod z3_solver;

pub use calories::{build_program, maximize_calories};
pub use microlp::MicroLpSolver;
pub use program::{IntegerProgram, LinearConstraint, SolveStatus, Solver, SolverKind};
#[cfg(feature = "z3")]
pub use z3_solver::Z3Solver;

use crate::error::Result;

/// Instantiate the backend for `kind`.
pub fn solver_for(kind: SolverKind) -> Result<Box<dyn Solver>> {
    match kind {
        SolverKind::Microlp => Ok(Box::new(MicroLpSolver::new())),
        #[cfg(feature = "z3")]
        SolverKind::Z3 => Ok(Box::new(Z3Solver::new())),
        #[cfg(not(feature = "z3"))]
        SolverKind::Z3 => Err(crate::error::TacoError::SolverUnavailable("z3")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TacoError;

    #[test]
    fn test_solver_for_microlp() {
        let solver = solver_for(SolverKind::Microlp).unwrap();
        assert_eq!(solver.name(), "microlp");
    }

    #[cfg(not(feature = "z3"))]
    #[test]
    fn test_solver_for_z3_unavailable() {
        assert!(matches!(
            solver_for(SolverKind::Z3),
            Err(TacoError::SolverUnavailable("z3"))
        ));
    }

    #[cfg(feature = "z3")]
    #[test]
    fn test_solver_for_z3() {
        assert_eq!(solver_for(SolverKind::Z3).unwrap().name(), "z3");
    }
}
