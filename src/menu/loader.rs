use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::models::MenuItem;

/// Load the menu from a CSV file with header `Item,Price,Calories`.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let menu = read_menu(file)?;
    info!("loaded {} menu items from {}", menu.len(), path.display());
    Ok(menu)
}

/// Parse menu records from any CSV source.
///
/// Deduplicates by name: the last row wins but keeps the first row's position.
pub fn read_menu<R: Read>(reader: R) -> Result<Vec<MenuItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items: Vec<MenuItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in rdr.deserialize() {
        let item: MenuItem = record?;

        if !item.is_valid() {
            warn!("menu item has an invalid price: {}", item.debug_string());
        }

        match positions.get(&item.name) {
            Some(&idx) => {
                warn!("duplicate menu item '{}', keeping the last row", item.name);
                items[idx] = item;
            }
            None => {
                positions.insert(item.name.clone(), items.len());
                items.push(item);
            }
        }
    }

    Ok(items)
}
