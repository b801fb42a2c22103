use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest per-serving amount a custom food can carry. Keeps totals finite
/// even at the largest quantity.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Identifier of a food in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u64);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A food that can be picked in the selector. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub id: FoodId,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Definition fields minus the id; the catalog assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// In-progress custom food, every field exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodDraft {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl FoodDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Calories => &mut self.calories,
            DraftField::Protein => &mut self.protein,
            DraftField::Carbs => &mut self.carbs,
            DraftField::Fat => &mut self.fat,
        };
        *slot = value;
    }

    /// Converts the draft into numeric form. Never fails: blank, garbage,
    /// negative and non-finite amounts all become 0, amounts above
    /// [`MAX_AMOUNT`] are clamped to it.
    pub fn commit(&self) -> NewFood {
        NewFood {
            name: self.name.trim().to_string(),
            calories: coerce_amount(&self.calories),
            protein: coerce_amount(&self.protein),
            carbs: coerce_amount(&self.carbs),
            fat: coerce_amount(&self.fat),
        }
    }
}

fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.min(MAX_AMOUNT),
        _ => 0.0,
    }
}
