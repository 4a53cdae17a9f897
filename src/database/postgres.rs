use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Recipe, RecipeDetails, User};
use crate::database::repository::{RecipeRepository, UserRepository};

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash
             FROM cookenu_users
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, user: &User) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO cookenu_users (id, name, email, password_hash)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(DatabaseError::DuplicateEmail(user.email.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn get_all_recipes(&self) -> Result<Vec<Recipe>, DatabaseError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, description, created_at, image_url, creator_id
             FROM cookenu_recipes",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recipes)
    }

    async fn get_recipe_details(&self, recipe_id: &str) -> Result<Option<RecipeDetails>, DatabaseError> {
        let details = sqlx::query_as::<_, RecipeDetails>(
            "SELECT r.id, r.title, r.description, r.created_at, r.image_url,
                    u.id AS creator_id, u.name AS creator_name
             FROM cookenu_recipes r
             JOIN cookenu_users u ON r.creator_id = u.id
             WHERE r.id = $1",
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(details)
    }

    async fn get_recipe_by_id(&self, recipe_id: &str) -> Result<Option<Recipe>, DatabaseError> {
        let recipe = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, description, created_at, image_url, creator_id
             FROM cookenu_recipes
             WHERE id = $1",
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(recipe)
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO cookenu_recipes (id, title, description, created_at, image_url, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.created_at)
        .bind(&recipe.image_url)
        .bind(&recipe.creator_id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(DatabaseError::UnknownCreator(recipe.creator_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_recipe_by_id(&self, recipe_id: &str) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM cookenu_recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
