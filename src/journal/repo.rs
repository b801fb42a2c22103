use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use super::dto::{LogEntry, MealType, Quantity};
use crate::catalog::FoodDefinition;

/// Logged entries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntryLog {
    entries: Vec<LogEntry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots `food` into a new entry and appends it.
    pub fn add(
        &mut self,
        food: &FoodDefinition,
        quantity: Quantity,
        meal_type: MealType,
    ) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            name: food.name.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            quantity,
            meal_type,
            logged_at: OffsetDateTime::now_utc(),
        };
        debug!(entry_id = %entry.id, food_id = %food.id, %quantity, %meal_type, "entry logged");
        self.entries.push(entry.clone());
        entry
    }

    /// Removes the entry with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> Option<LogEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(pos);
        debug!(entry_id = %id, "entry removed");
        Some(removed)
    }
}
