use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::MenuItem;

/// Quantity chosen for one menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub calories: u32,
}

impl OrderLine {
    pub fn new(item: &MenuItem, quantity: u32) -> Self {
        Self {
            name: item.name.clone(),
            quantity,
            price: item.price,
            calories: item.calories,
        }
    }

    pub fn total_calories(&self) -> u64 {
        u64::from(self.calories) * u64::from(self.quantity)
    }

    pub fn total_cost(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Quantity per menu item, in menu order. Items not bought have quantity 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Pair each menu item with its quantity. Both slices are in menu order.
    pub fn from_quantities(menu: &[MenuItem], quantities: &[u32]) -> Self {
        let lines = menu
            .iter()
            .zip(quantities)
            .map(|(item, &qty)| OrderLine::new(item, qty))
            .collect();
        Self { lines }
    }

    /// Quantity for an item by exact name.
    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.quantity)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Lines with a positive quantity.
    pub fn purchased(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter().filter(|line| line.quantity > 0)
    }

    pub fn total_calories(&self) -> u64 {
        self.lines.iter().map(OrderLine::total_calories).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.lines.iter().map(OrderLine::total_cost).sum()
    }

    /// Total number of units across all items.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Serialized as `{ name: quantity, ... }` in menu order.
impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            map.serialize_entry(&line.name, &line.quantity)?;
        }
        map.end()
    }
}

/// Result of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Optimal {
        order: Order,
        total_calories: u64,
        total_cost: f64,
    },
    /// The solver proved the model infeasible or unbounded.
    NoSolution,
}

impl OrderOutcome {
    pub fn optimal(order: Order) -> Self {
        let total_calories = order.total_calories();
        let total_cost = order.total_cost();
        Self::Optimal {
            order,
            total_calories,
            total_cost,
        }
    }

    pub fn order(&self) -> Option<&Order> {
        match self {
            Self::Optimal { order, .. } => Some(order),
            Self::NoSolution => None,
        }
    }

    /// Achieved calories; zero when there is no solution.
    pub fn total_calories(&self) -> u64 {
        match self {
            Self::Optimal { total_calories, .. } => *total_calories,
            Self::NoSolution => 0,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }
}
