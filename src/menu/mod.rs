mod loader;

pub use loader::{load_menu, read_menu};
