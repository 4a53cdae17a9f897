use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::{Authenticator, IdGenerator, TokenPayload};
use crate::database::models::{Recipe, RecipeDetails, RecipeSummary};
use crate::database::RecipeRepository;

use super::error::{ServiceError, ServiceResult};
use super::validation::{present_token, require_min_length, require_string};

pub const RECIPE_NOT_FOUND: &str = "Receita não encontrada";
pub const NOT_RECIPE_OWNER: &str =
    "Permissão insuficiente. Somente a conta que criou a receita pode deletá-la.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeInput {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub image_url: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOutput {
    pub message: String,
}

impl MessageOutput {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Recipe use cases. Every operation authenticates the caller first.
pub struct RecipeService {
    recipes: Arc<dyn RecipeRepository>,
    ids: IdGenerator,
    authenticator: Arc<Authenticator>,
}

impl RecipeService {
    pub fn new(recipes: Arc<dyn RecipeRepository>, ids: IdGenerator, authenticator: Arc<Authenticator>) -> Self {
        Self {
            recipes,
            ids,
            authenticator,
        }
    }

    fn authenticate(&self, token: Option<&str>) -> ServiceResult<TokenPayload> {
        let token = present_token(token).ok_or_else(ServiceError::invalid_token)?;
        self.authenticator.get_token_payload(token).ok_or_else(|| {
            tracing::warn!("Rejected request with an invalid token");
            ServiceError::invalid_token()
        })
    }

    pub async fn list_recipes(&self, token: Option<&str>) -> ServiceResult<Vec<RecipeSummary>> {
        self.authenticate(token)?;

        let recipes = self.recipes.get_all_recipes().await?;
        Ok(recipes.into_iter().map(RecipeSummary::from).collect())
    }

    pub async fn get_recipe_details(&self, token: Option<&str>, recipe_id: &str) -> ServiceResult<RecipeDetails> {
        self.authenticate(token)?;

        self.recipes
            .get_recipe_details(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(RECIPE_NOT_FOUND))
    }

    pub async fn create_recipe(&self, token: Option<&str>, input: CreateRecipeInput) -> ServiceResult<MessageOutput> {
        let caller = self.authenticate(token)?;

        let title = require_string(input.title.as_ref(), "title")?;
        let description = require_string(input.description.as_ref(), "description")?;
        let image_url = require_string(input.image_url.as_ref(), "imageUrl")?;

        require_min_length(title, "title", 3)?;
        require_min_length(description, "description", 6)?;
        require_min_length(image_url, "imageUrl", 6)?;

        let recipe = Recipe {
            id: self.ids.generate(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: Local::now().format("%d/%m/%Y").to_string(),
            image_url: image_url.to_string(),
            creator_id: caller.id,
        };

        self.recipes.create_recipe(&recipe).await?;
        tracing::info!("Recipe {} created by {}", recipe.id, recipe.creator_id);

        Ok(MessageOutput::new("Receita criada com sucesso"))
    }

    pub async fn delete_recipe(&self, token: Option<&str>, recipe_id: &str) -> ServiceResult<MessageOutput> {
        let caller = self.authenticate(token)?;

        let recipe = self
            .recipes
            .get_recipe_by_id(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(RECIPE_NOT_FOUND))?;

        if recipe.creator_id != caller.id {
            tracing::warn!("User {} attempted to delete recipe {} owned by someone else", caller.id, recipe.id);
            return Err(ServiceError::forbidden(NOT_RECIPE_OWNER));
        }

        self.recipes.delete_recipe_by_id(&recipe.id).await?;
        tracing::info!("Recipe {} deleted by {}", recipe.id, caller.id);

        Ok(MessageOutput::new("Receita deletada com sucesso"))
    }
}
