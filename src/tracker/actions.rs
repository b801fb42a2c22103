use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{DraftField, FoodDefinition, FoodId};
use crate::journal::{LogEntry, MealType, QuantityInput};

/// A user intent. Posted as `{"type": "add_entry"}`, `{"type": "set_quantity", "quantity": "3"}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SelectMealType { meal_type: MealType },
    SelectFood { food_id: Option<FoodId> },
    SetQuantity { quantity: QuantityInput },
    AddEntry,
    DeleteEntry { id: Uuid },
    OpenModal,
    EditDraft { field: DraftField, value: String },
    CloseModal,
    AddCustomFood,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectMealType { .. } => "select_meal_type",
            Action::SelectFood { .. } => "select_food",
            Action::SetQuantity { .. } => "set_quantity",
            Action::AddEntry => "add_entry",
            Action::DeleteEntry { .. } => "delete_entry",
            Action::OpenModal => "open_modal",
            Action::EditDraft { .. } => "edit_draft",
            Action::CloseModal => "close_modal",
            Action::AddCustomFood => "add_custom_food",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    NoFoodSelected,
    UnknownFood,
    UnknownEntry,
    ModalClosed,
    ModalAlreadyOpen,
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Updated,
    EntryAdded { entry: LogEntry },
    EntryRemoved { entry: LogEntry },
    FoodAdded { food: FoodDefinition },
    Ignored { reason: IgnoredReason },
}
