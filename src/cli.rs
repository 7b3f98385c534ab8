use clap::{Parser, Subcommand};

use crate::logging::LogLevel;
use crate::optimizer::SolverKind;

/// Tacobelly: find the highest-calorie order a budget can buy.
#[derive(Parser, Debug)]
#[command(name = "tacobelly")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV file (columns: Item, Price, Calories).
    #[arg(short, long, default_value = "data/taco_bell_menu.csv")]
    pub menu: String,

    /// Budget to spend. Read from standard input when omitted.
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Optimization backend.
    #[arg(long, value_enum, default_value_t = SolverKind::Microlp)]
    pub solver: SolverKind,

    /// Log verbosity (written to stderr).
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Find the highest-calorie order within the budget.
    #[default]
    Optimize,

    /// List the loaded menu.
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tacobelly"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.menu, "data/taco_bell_menu.csv");
        assert!(cli.budget.is_none());
        assert!(!cli.json);
        assert_eq!(cli.solver, SolverKind::Microlp);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_budget_and_subcommand() {
        let cli = Cli::parse_from([
            "tacobelly",
            "--budget",
            "12.50",
            "--json",
            "--solver",
            "z3",
            "--log-level",
            "debug",
            "optimize",
        ]);
        assert_eq!(cli.budget.as_deref(), Some("12.50"));
        assert!(cli.json);
        assert_eq!(cli.solver, SolverKind::Z3);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(matches!(cli.command, Some(Command::Optimize)));
    }

    #[test]
    fn test_menu_subcommand() {
        let cli = Cli::parse_from(["tacobelly", "-m", "other.csv", "menu"]);
        assert_eq!(cli.menu, "other.csv");
        assert!(matches!(cli.command, Some(Command::Menu)));
    }
}
