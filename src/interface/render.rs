use serde::Serialize;

use crate::error::Result;
use crate::models::{MenuItem, Order, OrderOutcome};

/// Message printed in place of an order when the solver finds none.
pub const NO_SOLUTION: &str = "No solution found";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportOrder<'a> {
    Items(&'a Order),
    Message(&'static str),
}

/// The printed result structure: `{"order": {...}, "total_calories": n}`.
///
/// Every menu item appears in `order` in menu order, including those with
/// quantity 0.
#[derive(Debug, Serialize)]
pub struct OrderReport<'a> {
    pub order: ReportOrder<'a>,
    pub total_calories: u64,
}

pub fn order_report(outcome: &OrderOutcome) -> OrderReport<'_> {
    match outcome {
        OrderOutcome::Optimal {
            order,
            total_calories,
            ..
        } => OrderReport {
            order: ReportOrder::Items(order),
            total_calories: *total_calories,
        },
        OrderOutcome::NoSolution => OrderReport {
            order: ReportOrder::Message(NO_SOLUTION),
            total_calories: 0,
        },
    }
}

/// Compact JSON for the result structure.
pub fn order_json(outcome: &OrderOutcome) -> Result<String> {
    Ok(serde_json::to_string(&order_report(outcome))?)
}

/// Print the result structure as pretty JSON.
pub fn display_order_json(outcome: &OrderOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&order_report(outcome))?);
    Ok(())
}

/// Display an optimized order in a formatted table.
pub fn display_order(outcome: &OrderOutcome, budget: f64) {
    let (order, total_calories, total_cost) = match outcome {
        OrderOutcome::Optimal {
            order,
            total_calories,
            total_cost,
        } => (order, *total_calories, *total_cost),
        OrderOutcome::NoSolution => {
            println!("{}", NO_SOLUTION);
            println!("Total calories: 0");
            return;
        }
    };

    println!();
    println!("=== Optimal Order (budget ${:.2}) ===", budget);
    println!();

    if order.is_empty() {
        println!("Nothing on the menu fits the budget.");
    }

    let max_name_len = order.purchased().map(|l| l.name.len()).max().unwrap_or(10);

    for line in order.purchased() {
        println!(
            "{:>3} x {:<width$} - {:>5} cal | ${:>6.2}",
            line.quantity,
            line.name,
            line.total_calories(),
            line.total_cost(),
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", order.item_count());
    println!("Total cost: ${:.2}", total_cost);
    println!("Leftover: ${:.2}", (budget - total_cost).max(0.0));
    println!("Total calories: {}", total_calories);
    println!();
}

/// Display the menu, best value first.
pub fn display_menu(menu: &[MenuItem]) {
    if menu.is_empty() {
        println!("Menu: (none)");
        return;
    }

    println!();
    println!("=== Menu ({} items) ===", menu.len());
    println!();

    let mut sorted: Vec<&MenuItem> = menu.iter().collect();
    sorted.sort_by(|a, b| b.calories_per_dollar().total_cmp(&a.calories_per_dollar()));

    let max_name_len = sorted.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in sorted {
        println!(
            "  {:<width$}  ${:>6.2}  {:>5} cal  {:>6.1} cal/$",
            item.name,
            item.price,
            item.calories,
            item.calories_per_dollar(),
            width = max_name_len
        );
    }

    println!();
}
