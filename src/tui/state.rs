use crate::provider::types::{GenerationRequest, Recipe};
use crate::store::RecipeStore;

/// Meal types offered by the form. Index 0 is the "any" sentinel.
pub const MEAL_TYPES: &[&str] = &["any", "breakfast", "lunch", "dinner", "dessert", "snack"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Result,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Ingredients,
    DietaryPreferences,
    MealType,
}

/// State of the terminal client. The embedded store owns the current
/// recipe, the saved collection, and the loading/error flags; everything
/// here mutates through methods on this struct only.
pub struct AppState {
    pub view: View,
    pub focus: FormField,
    pub ingredients: String,
    pub dietary_preferences: String,
    pub meal_type_index: usize,
    pub saved_index: usize,
    pub store: RecipeStore,
}

impl AppState {
    pub fn new(store: RecipeStore) -> Self {
        Self {
            view: View::Form,
            focus: FormField::Ingredients,
            ingredients: String::new(),
            dietary_preferences: String::new(),
            meal_type_index: 0,
            saved_index: 0,
            store,
        }
    }

    pub fn meal_type(&self) -> &'static str {
        MEAL_TYPES[self.meal_type_index % MEAL_TYPES.len()]
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Ingredients => FormField::DietaryPreferences,
            FormField::DietaryPreferences => FormField::MealType,
            FormField::MealType => FormField::Ingredients,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Ingredients => FormField::MealType,
            FormField::DietaryPreferences => FormField::Ingredients,
            FormField::MealType => FormField::DietaryPreferences,
        };
    }

    pub fn cycle_meal_type(&mut self, forward: bool) {
        let len = MEAL_TYPES.len();
        self.meal_type_index = if forward {
            (self.meal_type_index + 1) % len
        } else {
            (self.meal_type_index + len - 1) % len
        };
    }

    pub fn active_field(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Ingredients => Some(&mut self.ingredients),
            FormField::DietaryPreferences => Some(&mut self.dietary_preferences),
            FormField::MealType => None,
        }
    }

    /// Submit is allowed only when no request is in flight and the
    /// ingredients field is non-empty.
    pub fn can_submit(&self) -> bool {
        !self.store.loading && !self.ingredients.trim().is_empty()
    }

    pub fn request(&self) -> GenerationRequest {
        let prefs = self.dietary_preferences.trim();
        GenerationRequest {
            ingredients: self.ingredients.trim().to_string(),
            dietary_preferences: if prefs.is_empty() {
                None
            } else {
                Some(prefs.to_string())
            },
            meal_type: self.meal_type().to_string(),
        }
    }

    /// Apply the outcome of an in-flight generation. Success replaces the
    /// current recipe and switches to the result view; failure keeps the
    /// current recipe unset and raises the error banner.
    pub fn finish_generation(&mut self, result: Result<Recipe, String>) {
        self.store.loading = false;
        match result {
            Ok(recipe) => {
                self.store.current = Some(recipe);
                self.store.error = None;
                self.view = View::Result;
            }
            Err(message) => {
                self.store.error = Some(message);
            }
        }
    }

    pub fn save_current(&mut self) {
        if let Some(recipe) = self.store.current.clone() {
            self.store.save_recipe(recipe);
        }
    }

    pub fn remove_selected(&mut self) {
        self.store.remove_saved(self.saved_index);
        if self.saved_index >= self.store.saved().len() {
            self.saved_index = self.store.saved().len().saturating_sub(1);
        }
    }

    pub fn select_prev(&mut self) {
        self.saved_index = self.saved_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.saved_index + 1 < self.store.saved().len() {
            self.saved_index += 1;
        }
    }

    /// Open the selected saved recipe in the result view.
    pub fn open_selected(&mut self) {
        if let Some(recipe) = self.store.saved().get(self.saved_index).cloned() {
            self.store.current = Some(recipe);
            self.view = View::Result;
        }
    }
}
