use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value from the quantity field: either a JSON number or typed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

/// Number of servings, never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(servings: u32) -> Self {
        Quantity(servings.max(1))
    }

    /// Clamps whatever was typed into a valid quantity. Fractions are
    /// truncated, anything below 1 or non-numeric becomes 1.
    pub fn from_input(input: &QuantityInput) -> Self {
        let value = match input {
            QuantityInput::Number(n) => *n,
            QuantityInput::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        };
        Self::clamp(value)
    }

    fn clamp(value: f64) -> Self {
        if value.is_nan() || value < 1.0 {
            return Self::ONE;
        }
        // `as` saturates at u32::MAX
        Quantity(value.trunc() as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Quantity {
    fn from(v: u32) -> Self {
        Quantity::new(v)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged serving. Nutrition values are copied from the food at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub quantity: Quantity,
    pub meal_type: MealType,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

impl LogEntry {
    fn scaled(&self, per_serving: f64) -> f64 {
        per_serving * f64::from(self.quantity.get())
    }

    pub fn total_calories(&self) -> f64 {
        self.scaled(self.calories)
    }

    pub fn total_protein(&self) -> f64 {
        self.scaled(self.protein)
    }

    pub fn total_carbs(&self) -> f64 {
        self.scaled(self.carbs)
    }

    pub fn total_fat(&self) -> f64 {
        self.scaled(self.fat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> QuantityInput {
        QuantityInput::Text(s.into())
    }

    #[test]
    fn quantity_below_one_is_clamped_to_one() {
        assert_eq!(Quantity::from_input(&text("0")).get(), 1);
        assert_eq!(Quantity::from_input(&text("-3")).get(), 1);
        assert_eq!(Quantity::from_input(&QuantityInput::Number(-7.0)).get(), 1);
        assert_eq!(Quantity::from_input(&QuantityInput::Number(0.5)).get(), 1);
    }

    #[test]
    fn quantity_non_numeric_becomes_one() {
        assert_eq!(Quantity::from_input(&text("")).get(), 1);
        assert_eq!(Quantity::from_input(&text("two")).get(), 1);
        assert_eq!(Quantity::from_input(&QuantityInput::Number(f64::NAN)).get(), 1);
    }

    #[test]
    fn quantity_truncates_and_saturates() {
        assert_eq!(Quantity::from_input(&text(" 3 ")).get(), 3);
        assert_eq!(Quantity::from_input(&QuantityInput::Number(2.9)).get(), 2);
        assert_eq!(Quantity::from_input(&text("1e12")).get(), u32::MAX);
        assert_eq!(Quantity::new(0).get(), 1);
    }

    #[test]
    fn quantity_deserialize_never_yields_zero() {
        let q: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(q, Quantity::ONE);
        assert_eq!(serde_json::to_string(&Quantity::new(5)).unwrap(), "5");
    }

    #[test]
    fn quantity_input_accepts_numbers_and_strings() {
        let n: QuantityInput = serde_json::from_str("4").unwrap();
        let s: QuantityInput = serde_json::from_str(r#""-3""#).unwrap();
        assert_eq!(Quantity::from_input(&n).get(), 4);
        assert_eq!(Quantity::from_input(&s).get(), 1);
    }

    #[test]
    fn meal_type_serializes_by_display_name() {
        assert_eq!(serde_json::to_string(&MealType::Snacks).unwrap(), r#""Snacks""#);
        let m: MealType = serde_json::from_str(r#""Dinner""#).unwrap();
        assert_eq!(m, MealType::Dinner);
        assert_eq!(MealType::default(), MealType::Breakfast);
    }

    #[test]
    fn entry_totals_scale_by_quantity() {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            name: "Almonds (1 oz)".into(),
            calories: 164.0,
            protein: 6.0,
            carbs: 6.0,
            fat: 14.0,
            quantity: Quantity::new(3),
            meal_type: MealType::Snacks,
            logged_at: OffsetDateTime::now_utc(),
        };
        assert_eq!(entry.total_calories(), 492.0);
        assert_eq!(entry.total_protein(), 18.0);
        assert_eq!(entry.total_carbs(), 18.0);
        assert_eq!(entry.total_fat(), 42.0);
    }
}
