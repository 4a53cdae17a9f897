use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored recipe row. `created_at` is the creation date as `dd/mm/yyyy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub image_url: String,
    pub creator_id: String,
}

/// A recipe joined with its creator's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub image_url: String,
    pub creator_id: String,
    pub creator_name: String,
}

/// List view of a recipe; description and creator are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub image_url: String,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image_url: recipe.image_url,
        }
    }
}

impl RecipeDetails {
    pub fn from_recipe(recipe: Recipe, creator_name: impl Into<String>) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            created_at: recipe.created_at,
            image_url: recipe.image_url,
            creator_id: recipe.creator_id,
            creator_name: creator_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe() -> Recipe {
        Recipe {
            id: "r1".into(),
            title: "Bolo".into(),
            description: "Bolo de cenoura".into(),
            created_at: "18/10/2026".into(),
            image_url: "http://x".into(),
            creator_id: "u1".into(),
        }
    }

    #[test]
    fn summary_omits_description_and_creator() {
        let value = serde_json::to_value(RecipeSummary::from(recipe())).unwrap();
        assert_eq!(value, json!({ "id": "r1", "title": "Bolo", "imageUrl": "http://x" }));
    }

    #[test]
    fn details_serialize_camel_case() {
        let value = serde_json::to_value(RecipeDetails::from_recipe(recipe(), "Ana")).unwrap();
        assert_eq!(value["createdAt"], "18/10/2026");
        assert_eq!(value["creatorId"], "u1");
        assert_eq!(value["creatorName"], "Ana");
    }
}
