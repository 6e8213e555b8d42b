use cookbook_shared::recipe::RecipeId;

use crate::RecipeStore;

impl RecipeStore {
    /// Flips favorite membership and returns the new state.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        if self.is_favorite(id) {
            self.remove_favorite(id);
            return false;
        }

        self.add_favorite(id)
    }
}
