//! In-memory recipe store.
//!
//! Lives for the process lifetime and starts empty on every restart. Ids come
//! from a counter that only ever grows, so an id is never handed out twice even
//! after deletions.

use parking_lot::RwLock;

use crate::types::Recipe;

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    recipes: Vec<Recipe>,
}

/// Ordered collection of recipes shared by all request handlers.
#[derive(Debug, Default)]
pub struct RecipeStore {
    inner: RwLock<Inner>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe and return the stored record. Inputs are expected to be
    /// validated already.
    pub fn append(&self, city_id: &str, content: &str) -> Recipe {
        let mut inner = self.inner.write();
        inner.last_id += 1;

        let recipe = Recipe {
            id: inner.last_id,
            city_id: city_id.to_string(),
            content: content.to_string(),
        };
        inner.recipes.push(recipe.clone());

        tracing::debug!(id = recipe.id, city_id, "recipe stored");
        recipe
    }

    /// All recipes for `city_id`, in insertion order.
    pub fn list_by_city(&self, city_id: &str) -> Vec<Recipe> {
        self.inner
            .read()
            .recipes
            .iter()
            .filter(|r| r.city_id == city_id)
            .cloned()
            .collect()
    }

    /// Remove the first recipe matching both `id` and `city_id`.
    /// Returns whether anything was removed.
    pub fn remove(&self, id: u64, city_id: &str) -> bool {
        let mut inner = self.inner.write();
        let Some(index) = inner
            .recipes
            .iter()
            .position(|r| r.id == id && r.city_id == city_id)
        else {
            return false;
        };

        inner.recipes.remove(index);
        tracing::debug!(id, city_id, "recipe removed");
        true
    }

    pub fn len(&self) -> usize {
        self.inner.read().recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_sequential_ids() {
        let store = RecipeStore::new();
        let first = store.append("paris", "a crêpe recipe with butter");
        let second = store.append("lyon", "quenelles de brochet sauce");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_by_city_filters_and_keeps_order() {
        let store = RecipeStore::new();
        store.append("paris", "first paris recipe");
        store.append("lyon", "only lyon recipe");
        store.append("paris", "second paris recipe");

        let paris = store.list_by_city("paris");
        let contents: Vec<&str> = paris.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["first paris recipe", "second paris recipe"]);
        assert!(store.list_by_city("nantes").is_empty());
    }

    #[test]
    fn test_city_id_is_matched_verbatim() {
        let store = RecipeStore::new();
        store.append("Paris", "capitalized city recipe");

        assert!(store.list_by_city("paris").is_empty());
        assert_eq!(store.list_by_city("Paris").len(), 1);
    }

    #[test]
    fn test_remove_requires_matching_city() {
        let store = RecipeStore::new();
        let recipe = store.append("paris", "soupe à l'oignon");

        assert!(!store.remove(recipe.id, "lyon"));
        assert!(store.remove(recipe.id, "paris"));
        assert!(!store.remove(recipe.id, "paris"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = RecipeStore::new();
        store.append("paris", "recipe number one");
        let second = store.append("paris", "recipe number two");
        assert!(store.remove(1, "paris"));

        let third = store.append("paris", "recipe number three");
        assert_ne!(third.id, second.id);
        assert_eq!(third.id, 3);
    }
}
