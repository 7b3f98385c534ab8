use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use crate::error::{Result, TacoError};

/// Parse a budget amount such as `12.5` or `$12.50`.
pub fn parse_budget(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    let budget: f64 = amount
        .parse()
        .map_err(|_| TacoError::InvalidInput(format!("Invalid budget: '{}'", trimmed)))?;

    if !budget.is_finite() {
        return Err(TacoError::InvalidInput(format!(
            "Invalid budget: '{}'",
            trimmed
        )));
    }

    Ok(budget)
}

/// Ask for the budget. Falls back to reading one line when stdin is not a terminal.
pub fn prompt_budget() -> Result<f64> {
    let stdin = io::stdin();

    let input = if stdin.is_terminal() {
        Input::<String>::new()
            .with_prompt("Enter your taco bell budget")
            .interact_text()?
    } else {
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        line
    };

    parse_budget(&input)
}
