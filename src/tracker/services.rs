use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::actions::{Action, IgnoredReason, Outcome};
use crate::catalog::{FoodCatalog, FoodDefinition, FoodDraft, FoodId};
use crate::journal::{EntryLog, MealType, Quantity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Everything the form holds between interactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub selected_food: Option<FoodId>,
    pub quantity: Quantity,
    pub meal_type: MealType,
    pub draft: FoodDraft,
    pub modal: ModalState,
}

/// One tracking session: catalog, log and form state, mutated only through [`Tracker::dispatch`].
#[derive(Debug, Clone)]
pub struct Tracker {
    catalog: FoodCatalog,
    log: EntryLog,
    form: FormState,
}

impl Tracker {
    pub fn new() -> Self {
        Self::with_catalog(FoodCatalog::seeded())
    }

    pub fn with_catalog(catalog: FoodCatalog) -> Self {
        Self {
            catalog,
            log: EntryLog::new(),
            form: FormState::default(),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let name = action.name();
        let outcome = self.apply(action);
        match &outcome {
            Outcome::Ignored { reason } => debug!(action = name, ?reason, "action ignored"),
            Outcome::Updated => debug!(action = name, "form updated"),
            _ => info!(
                action = name,
                entries = self.log.len(),
                foods = self.catalog.len(),
                "state changed"
            ),
        }
        outcome
    }

    fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::SelectMealType { meal_type } => {
                self.form.meal_type = meal_type;
                Outcome::Updated
            }
            Action::SelectFood { food_id } => {
                self.form.selected_food = food_id;
                Outcome::Updated
            }
            Action::SetQuantity { quantity } => {
                self.form.quantity = Quantity::from_input(&quantity);
                Outcome::Updated
            }
            Action::AddEntry => self.add_entry(),
            Action::DeleteEntry { id } => match self.log.remove(id) {
                Some(entry) => Outcome::EntryRemoved { entry },
                None => Outcome::Ignored {
                    reason: IgnoredReason::UnknownEntry,
                },
            },
            Action::OpenModal => match self.form.modal {
                ModalState::Open => Outcome::Ignored {
                    reason: IgnoredReason::ModalAlreadyOpen,
                },
                ModalState::Closed => {
                    self.form.modal = ModalState::Open;
                    Outcome::Updated
                }
            },
            Action::EditDraft { field, value } => {
                self.form.draft.set(field, value);
                Outcome::Updated
            }
            Action::CloseModal => match self.form.modal {
                ModalState::Closed => Outcome::Ignored {
                    reason: IgnoredReason::ModalClosed,
                },
                ModalState::Open => {
                    self.form.modal = ModalState::Closed;
                    self.form.draft = FoodDraft::default();
                    Outcome::Updated
                }
            },
            Action::AddCustomFood => match self.form.modal {
                ModalState::Closed => Outcome::Ignored {
                    reason: IgnoredReason::ModalClosed,
                },
                ModalState::Open => {
                    let draft = std::mem::take(&mut self.form.draft);
                    let food = self.catalog.add(draft.commit());
                    self.form.modal = ModalState::Closed;
                    Outcome::FoodAdded { food }
                }
            },
        }
    }

    fn add_entry(&mut self) -> Outcome {
        let Some(food_id) = self.form.selected_food else {
            return Outcome::Ignored {
                reason: IgnoredReason::NoFoodSelected,
            };
        };
        let Some(food) = self.catalog.find(food_id) else {
            return Outcome::Ignored {
                reason: IgnoredReason::UnknownFood,
            };
        };
        let entry = self.log.add(food, self.form.quantity, self.form.meal_type);
        self.form.selected_food = None;
        self.form.quantity = Quantity::ONE;
        Outcome::EntryAdded { entry }
    }

    /// Commits a draft straight into the catalog, bypassing the modal.
    pub fn add_food(&mut self, draft: &FoodDraft) -> FoodDefinition {
        let food = self.catalog.add(draft.commit());
        info!(food_id = %food.id, foods = self.catalog.len(), "food added");
        food
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
