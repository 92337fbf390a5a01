use std::path::PathBuf;

use tracing::warn;

use crate::provider::types::Recipe;

/// Fixed name of the persisted saved-recipe collection.
pub const STORAGE_FILE: &str = "saved_recipes.json";

/// Client-side application state: the recipe currently on screen and the
/// saved collection, synchronized with a single local JSON file. All
/// mutations run on the UI event loop, so no locking is involved.
pub struct RecipeStore {
    pub current: Option<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
    saved: Vec<Recipe>,
    path: PathBuf,
}

impl RecipeStore {
    /// Load the persisted collection. An absent file means an empty
    /// collection; an unreadable one is logged and treated the same,
    /// never surfaced to the user.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let saved = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(saved) => saved,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "error parsing saved recipes, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            current: None,
            loading: false,
            error: None,
            saved,
            path,
        }
    }

    pub fn open_default() -> Self {
        Self::load(STORAGE_FILE)
    }

    pub fn saved(&self) -> &[Recipe] {
        &self.saved
    }

    /// Append to the saved collection unless a recipe with the same title
    /// already exists (a no-op, not an overwrite). Returns whether the
    /// recipe was added.
    pub fn save_recipe(&mut self, recipe: Recipe) -> bool {
        if self.saved.iter().any(|r| r.title == recipe.title) {
            return false;
        }
        self.saved.push(recipe);
        self.persist();
        true
    }

    /// Remove the recipe at ordinal position `index`. Out-of-range indices
    /// are ignored. When the collection empties, the persisted file is
    /// deleted rather than written as an empty array.
    pub fn remove_saved(&mut self, index: usize) -> Option<Recipe> {
        if index >= self.saved.len() {
            return None;
        }
        let removed = self.saved.remove(index);
        self.persist();
        Some(removed)
    }

    fn persist(&self) {
        if self.saved.is_empty() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %e, "failed to clear saved recipes");
                }
            }
            return;
        }

        let serialized = match serde_json::to_string(&self.saved) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "failed to serialize saved recipes");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %e, "failed to write saved recipes");
        }
    }
}
