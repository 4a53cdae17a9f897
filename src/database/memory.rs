use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Recipe, RecipeDetails, User};
use crate::database::repository::{RecipeRepository, UserRepository};

/// Process-local store used when no database is configured.
///
/// Recipes are kept in insertion order so listing is stable. Each call takes
/// the lock once, so individual operations are atomic just like single SQL
/// statements.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<(), DatabaseError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DatabaseError::DuplicateEmail(user.email.clone()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryStore {
    async fn get_all_recipes(&self) -> Result<Vec<Recipe>, DatabaseError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn get_recipe_details(&self, recipe_id: &str) -> Result<Option<RecipeDetails>, DatabaseError> {
        let recipe = match self.get_recipe_by_id(recipe_id).await? {
            Some(recipe) => recipe,
            None => return Ok(None),
        };

        // Inner join: a recipe whose creator is missing is not returned
        let users = self.users.read().await;
        Ok(users
            .get(&recipe.creator_id)
            .map(|creator| RecipeDetails::from_recipe(recipe.clone(), creator.name.clone())))
    }

    async fn get_recipe_by_id(&self, recipe_id: &str) -> Result<Option<Recipe>, DatabaseError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().find(|r| r.id == recipe_id).cloned())
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<(), DatabaseError> {
        // Same guarantee as the creator_id foreign key in Postgres
        let users = self.users.read().await;
        if !users.contains_key(&recipe.creator_id) {
            return Err(DatabaseError::UnknownCreator(recipe.creator_id.clone()));
        }
        self.recipes.write().await.push(recipe.clone());
        Ok(())
    }

    async fn delete_recipe_by_id(&self, recipe_id: &str) -> Result<(), DatabaseError> {
        self.recipes.write().await.retain(|r| r.id != recipe_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.into(),
            name: format!("User {}", id),
            email: email.into(),
            password_hash: "hash".into(),
        }
    }

    fn recipe(id: &str, creator_id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            title: "Bolo".into(),
            description: "Bolo de cenoura".into(),
            created_at: "18/10/2026".into(),
            image_url: "http://x".into(),
            creator_id: creator_id.into(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryStore::new();
        store.create_user(&user("u1", "a@b.com")).await.unwrap();
        let err = store.create_user(&user("u2", "a@b.com")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateEmail(_)));
        assert_eq!(store.find_by_email("a@b.com").await.unwrap().unwrap().id, "u1");
    }

    #[tokio::test]
    async fn recipes_keep_insertion_order() {
        let store = InMemoryStore::new();
        store.create_user(&user("u1", "a@b.com")).await.unwrap();
        for id in ["r1", "r2", "r3"] {
            store.create_recipe(&recipe(id, "u1")).await.unwrap();
        }
        let ids: Vec<String> = store.get_all_recipes().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn details_join_creator_name() {
        let store = InMemoryStore::new();
        store.create_user(&user("u1", "a@b.com")).await.unwrap();
        store.create_recipe(&recipe("r1", "u1")).await.unwrap();

        let details = store.get_recipe_details("r1").await.unwrap().unwrap();
        assert_eq!(details.creator_name, "User u1");
        assert!(store.get_recipe_details("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let store = InMemoryStore::new();
        store.create_user(&user("u1", "a@b.com")).await.unwrap();
        store.create_recipe(&recipe("r1", "u1")).await.unwrap();
        store.create_recipe(&recipe("r2", "u1")).await.unwrap();
        store.delete_recipe_by_id("r1").await.unwrap();
        assert!(store.get_recipe_by_id("r1").await.unwrap().is_none());
        assert!(store.get_recipe_by_id("r2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn recipe_requires_existing_creator() {
        let store = InMemoryStore::new();
        let err = store.create_recipe(&recipe("r1", "ghost")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::UnknownCreator(ref id) if id == "ghost"));
        assert!(store.get_all_recipes().await.unwrap().is_empty());
    }
}
