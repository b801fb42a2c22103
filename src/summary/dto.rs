use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub const ORDER: [Macro; 3] = [Macro::Protein, Macro::Carbs, Macro::Fat];

    pub fn label(self) -> &'static str {
        match self {
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fat => "Fat",
        }
    }
}

/// Grams of one macronutrient across the whole log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_calories: f64,
    pub macro_breakdown: [MacroSlice; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Fraction of all macro grams, 0 when the log is empty.
    pub share: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub segments: Vec<ChartSegment>,
}
