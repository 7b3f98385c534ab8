use serde::{Deserialize, Serialize};

/// A purchasable menu item.
///
/// Field names follow the menu CSV header: `Item`, `Price`, `Calories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "Item")]
    pub name: String,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Calories")]
    pub calories: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, calories: u32) -> Self {
        Self {
            name: name.into(),
            price,
            calories,
        }
    }

    /// Calories bought per unit of currency. Zero for free or invalid prices.
    #[inline]
    pub fn calories_per_dollar(&self) -> f64 {
        if self.price > 0.0 {
            self.calories as f64 / self.price
        } else {
            0.0
        }
    }

    /// Price is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{}: ${:.2}, {} cal", self.name, self.price, self.calories)
    }
}
