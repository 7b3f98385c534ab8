pub mod prompts;
pub mod render;

pub use prompts::{parse_budget, prompt_budget};
pub use render::{
    display_menu, display_order, display_order_json, order_json, order_report, OrderReport,
    ReportOrder, NO_SOLUTION,
};
