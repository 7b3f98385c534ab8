use thiserror::Error;

#[derive(Debug, Error)]
pub enum TacoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Solver '{0}' is not available in this build")]
    SolverUnavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, TacoError>;
