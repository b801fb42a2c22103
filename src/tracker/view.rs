use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::services::{ModalState, Tracker};
use crate::catalog::{FoodDraft, FoodId};
use crate::journal::{LogEntry, MealType};
use crate::summary::{format_amount, summarize, MacroSlice, PieChart};

pub const TITLE: &str = "Calorie Tracker";
pub const SUMMARY_HEADING: &str = "Daily Summary";
pub const MODAL_TITLE: &str = "Add Custom Food";

/// The whole screen, rebuilt from scratch after each action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub title: String,
    pub form: FormView,
    pub entries: Vec<EntryRow>,
    pub summary: SummaryView,
    pub modal: ModalView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub meal_types: Vec<MealType>,
    pub meal_type: MealType,
    pub foods: Vec<FoodOption>,
    pub selected_food: Option<FoodId>,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOption {
    pub id: FoodId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRow {
    pub id: Uuid,
    pub primary: String,
    pub secondary: String,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub heading: String,
    pub total_calories: f64,
    pub total_text: String,
    pub macro_breakdown: [MacroSlice; 3],
    pub chart: PieChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalView {
    pub open: bool,
    pub title: String,
    pub draft: FoodDraft,
}

impl From<&LogEntry> for EntryRow {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id,
            primary: format!("{}x {}", e.quantity, e.name),
            secondary: format!(
                "{} cal ({})",
                format_amount(e.total_calories()),
                e.meal_type
            ),
            logged_at: e.logged_at,
        }
    }
}

impl Tracker {
    pub fn render(&self) -> View {
        let form = self.form();
        let foods = self
            .catalog()
            .list_all()
            .iter()
            .map(|f| FoodOption {
                id: f.id,
                label: format!("{} ({} cal)", f.name, format_amount(f.calories)),
            })
            .collect();

        let summary = summarize(self.log().entries());
        let chart = summary.chart();

        View {
            title: TITLE.to_string(),
            form: FormView {
                meal_types: MealType::ALL.to_vec(),
                meal_type: form.meal_type,
                foods,
                selected_food: form.selected_food,
                quantity: form.quantity.get(),
            },
            entries: self.log().entries().iter().map(EntryRow::from).collect(),
            summary: SummaryView {
                heading: SUMMARY_HEADING.to_string(),
                total_text: format!("Total Calories: {}", format_amount(summary.total_calories)),
                total_calories: summary.total_calories,
                macro_breakdown: summary.macro_breakdown,
                chart,
            },
            modal: ModalView {
                open: form.modal == ModalState::Open,
                title: MODAL_TITLE.to_string(),
                draft: form.draft.clone(),
            },
        }
    }
}
