use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Recipe, RecipeDetails, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// Fails with `DatabaseError::DuplicateEmail` when the email is taken.
    async fn create_user(&self, user: &User) -> Result<(), DatabaseError>;
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes, in whatever order the store yields them.
    async fn get_all_recipes(&self) -> Result<Vec<Recipe>, DatabaseError>;

    async fn get_recipe_details(&self, recipe_id: &str) -> Result<Option<RecipeDetails>, DatabaseError>;

    async fn get_recipe_by_id(&self, recipe_id: &str) -> Result<Option<Recipe>, DatabaseError>;

    async fn create_recipe(&self, recipe: &Recipe) -> Result<(), DatabaseError>;

    async fn delete_recipe_by_id(&self, recipe_id: &str) -> Result<(), DatabaseError>;
}
