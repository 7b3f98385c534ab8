use log::{debug, info};

use crate::error::{Result, TacoError};
use crate::models::{MenuItem, Order, OrderOutcome};
use crate::optimizer::money::{budget_to_cents, price_to_cents};
use crate::optimizer::program::{IntegerProgram, LinearConstraint, SolveStatus, Solver};

/// Build the calorie-maximization model: one non-negative integer quantity
/// per item, total cost in cents at most the budget.
pub fn build_program(menu: &[MenuItem], budget: f64) -> Result<IntegerProgram> {
    let variables = menu.iter().map(|item| item.name.clone()).collect();
    let objective = menu.iter().map(|item| i64::from(item.calories)).collect();
    let prices = menu
        .iter()
        .map(|item| price_to_cents(item.price))
        .collect::<Result<Vec<i64>>>()?;
    let budget_cents = budget_to_cents(budget)?;

    Ok(IntegerProgram::new(variables, objective)
        .with_constraint(LinearConstraint::new(prices, budget_cents)))
}

/// Find the order with the most calories that fits the budget.
///
/// Returns [`OrderOutcome::NoSolution`] when the solver proves the model
/// infeasible (negative budget) or unbounded (a free item with calories).
pub fn maximize_calories(
    menu: &[MenuItem],
    budget: f64,
    solver: &dyn Solver,
) -> Result<OrderOutcome> {
    let program = build_program(menu, budget)?;

    if program.is_empty() {
        let outcome = if program.is_feasible(&[]) {
            OrderOutcome::optimal(Order::default())
        } else {
            OrderOutcome::NoSolution
        };
        return Ok(outcome);
    }

    debug!(
        "solving with {}: {} variables, {} constraints",
        solver.name(),
        program.len(),
        program.constraints.len()
    );

    let assignment = match solver.solve(&program)? {
        SolveStatus::Optimal(values) => values,
        SolveStatus::Infeasible => {
            info!("{} proved the budget infeasible", solver.name());
            return Ok(OrderOutcome::NoSolution);
        }
        SolveStatus::Unbounded => {
            info!("{} found the objective unbounded", solver.name());
            return Ok(OrderOutcome::NoSolution);
        }
    };

    if !program.is_feasible(&assignment) {
        return Err(TacoError::Solver(format!(
            "{} returned an assignment outside the budget",
            solver.name()
        )));
    }

    let quantities = assignment
        .into_iter()
        .map(|qty| {
            u32::try_from(qty)
                .map_err(|_| TacoError::Solver(format!("quantity {} out of range", qty)))
        })
        .collect::<Result<Vec<u32>>>()?;

    let outcome = OrderOutcome::optimal(Order::from_quantities(menu, &quantities));
    info!(
        "optimal order: {} calories for {:.2}",
        outcome.total_calories(),
        outcome.order().map(Order::total_cost).unwrap_or(0.0)
    );
    Ok(outcome)
}
