use tracing::debug;

use super::dto::{FoodDefinition, FoodId, NewFood};

const SEED: [(&str, f64, f64, f64, f64); 4] = [
    ("Apple", 95.0, 0.5, 25.0, 0.3),
    ("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    ("Rice (1 cup)", 206.0, 4.3, 45.0, 0.4),
    ("Almonds (1 oz)", 164.0, 6.0, 6.0, 14.0),
];

/// Append-only list of foods. Lives for one process; restart brings back the seed set.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    foods: Vec<FoodDefinition>,
    next_id: u64,
}

impl FoodCatalog {
    pub fn seeded() -> Self {
        let mut catalog = Self::empty();
        for (name, calories, protein, carbs, fat) in SEED {
            catalog.add(NewFood {
                name: name.to_string(),
                calories,
                protein,
                carbs,
                fat,
            });
        }
        catalog
    }

    pub fn empty() -> Self {
        Self {
            foods: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list_all(&self) -> &[FoodDefinition] {
        &self.foods
    }

    pub fn find(&self, id: FoodId) -> Option<&FoodDefinition> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn add(&mut self, food: NewFood) -> FoodDefinition {
        let id = FoodId(self.next_id);
        self.next_id += 1;

        let NewFood {
            name,
            calories,
            protein,
            carbs,
            fat,
        } = food;
        let stored = FoodDefinition {
            id,
            name,
            calories,
            protein,
            carbs,
            fat,
        };
        debug!(food_id = %id, name = %stored.name, "food added to catalog");
        self.foods.push(stored.clone());
        stored
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
