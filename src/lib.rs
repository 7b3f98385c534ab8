pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod menu;
pub mod models;
pub mod optimizer;

pub use error::{Result, TacoError};
pub use models::{MenuItem, Order, OrderOutcome};
