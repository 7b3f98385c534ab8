mod menu_item;
mod order;

pub use menu_item::MenuItem;
pub use order::{Order, OrderLine, OrderOutcome};
