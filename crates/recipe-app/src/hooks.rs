//! Action hooks for the screen's buttons
//!
//! The back, favorite, "Add to shopping list" and "See All" buttons have no
//! behavior of their own. The update function turns them into a
//! [`HookEvent`]; the runner hands that to a [`RecipeHooks`] implementation
//! supplied by whoever embeds the screen.

use recipe_core::Recipe;
use tracing::info;

/// A button press routed to the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    Back,
    Favorite { favorite: bool },
    AddToShoppingList { servings: i32 },
    SeeAllReviews,
}

/// Collaborator that reacts to the screen's buttons
#[cfg_attr(test, mockall::automock)]
pub trait RecipeHooks {
    fn on_back(&self);
    fn on_favorite(&self, favorite: bool);
    fn on_add_to_shopping_list(&self, recipe: &Recipe, servings: i32);
    fn on_see_all_reviews(&self, recipe: &Recipe);
}

/// Route `event` to the matching hook
pub fn dispatch(hooks: &dyn RecipeHooks, event: HookEvent, recipe: &Recipe) {
    match event {
        HookEvent::Back => hooks.on_back(),
        HookEvent::Favorite { favorite } => hooks.on_favorite(favorite),
        HookEvent::AddToShoppingList { servings } => {
            hooks.on_add_to_shopping_list(recipe, servings)
        }
        HookEvent::SeeAllReviews => hooks.on_see_all_reviews(recipe),
    }
}

/// Default hooks: record the press in the log and do nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHooks;

impl RecipeHooks for LoggingHooks {
    fn on_back(&self) {
        info!("Back pressed");
    }

    fn on_favorite(&self, favorite: bool) {
        info!("Favorite toggled: {}", favorite);
    }

    fn on_add_to_shopping_list(&self, recipe: &Recipe, servings: i32) {
        info!(
            "Add to shopping list: {} ({} servings, {} ingredients)",
            recipe.title,
            servings,
            recipe.ingredients.len()
        );
    }

    fn on_see_all_reviews(&self, recipe: &Recipe) {
        info!("See all reviews: {} ({})", recipe.title, recipe.reviews);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use recipe_core::strawberry_cake;

    #[test]
    fn test_dispatch_shopping_list_passes_servings() {
        let recipe = strawberry_cake();
        let mut hooks = MockRecipeHooks::new();
        hooks
            .expect_on_add_to_shopping_list()
            .withf(|recipe, servings| recipe.title == "Strawberry Cake" && *servings == 7)
            .times(1)
            .return_const(());

        dispatch(&hooks, HookEvent::AddToShoppingList { servings: 7 }, &recipe);
    }

    #[test]
    fn test_dispatch_favorite() {
        let recipe = strawberry_cake();
        let mut hooks = MockRecipeHooks::new();
        hooks
            .expect_on_favorite()
            .with(eq(true))
            .times(1)
            .return_const(());

        dispatch(&hooks, HookEvent::Favorite { favorite: true }, &recipe);
    }

    #[test]
    fn test_dispatch_back_and_reviews() {
        let recipe = strawberry_cake();
        let mut hooks = MockRecipeHooks::new();
        hooks.expect_on_back().times(1).return_const(());
        hooks.expect_on_see_all_reviews().times(1).return_const(());

        dispatch(&hooks, HookEvent::Back, &recipe);
        dispatch(&hooks, HookEvent::SeeAllReviews, &recipe);
    }

    #[test]
    fn test_logging_hooks_do_not_panic() {
        let recipe = strawberry_cake();
        let hooks = LoggingHooks;
        dispatch(&hooks, HookEvent::Back, &recipe);
        dispatch(&hooks, HookEvent::Favorite { favorite: false }, &recipe);
        dispatch(&hooks, HookEvent::AddToShoppingList { servings: 6 }, &recipe);
        dispatch(&hooks, HookEvent::SeeAllReviews, &recipe);
    }
}
