use clap::Parser;
use log::info;

use tacobelly_rs::cli::{Cli, Command};
use tacobelly_rs::error::Result;
use tacobelly_rs::interface::{
    display_menu, display_order, display_order_json, parse_budget, prompt_budget,
};
use tacobelly_rs::logging::init_logger;
use tacobelly_rs::menu::load_menu;
use tacobelly_rs::optimizer::{maximize_calories, solver_for};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    match cli.command.as_ref().unwrap_or(&Command::Optimize) {
        Command::Optimize => cmd_optimize(&cli),
        Command::Menu => cmd_menu(&cli.menu),
    }
}

/// Find and print the highest-calorie order within the budget.
fn cmd_optimize(cli: &Cli) -> Result<()> {
    let solver = solver_for(cli.solver)?;
    let menu = load_menu(&cli.menu)?;

    let budget = match &cli.budget {
        Some(text) => parse_budget(text)?,
        None => prompt_budget()?,
    };
    info!("budget {:.2} over {} items using {}", budget, menu.len(), cli.solver);

    let outcome = maximize_calories(&menu, budget, solver.as_ref())?;

    if cli.json {
        display_order_json(&outcome)?;
    } else {
        display_order(&outcome, budget);
    }

    Ok(())
}

/// List the loaded menu.
fn cmd_menu(menu_path: &str) -> Result<()> {
    let menu = load_menu(menu_path)?;
    display_menu(&menu);
    Ok(())
}
