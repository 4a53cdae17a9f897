// handlers/recipes.rs - /recipes endpoints (token required)

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::ApiError;
use crate::middleware::{AuthToken, LenientJson, LenientPath};
use crate::services::CreateRecipeInput;
use crate::state::AppState;

/// GET /recipes/all - list every recipe as `{id, title, imageUrl}`
pub async fn list_recipes(State(state): State<AppState>, token: AuthToken) -> Result<impl IntoResponse, ApiError> {
    let recipes = state
        .recipes
        .list_recipes(token.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao buscar todas as receitas"))?;

    Ok((StatusCode::OK, Json(recipes)))
}

/// GET /recipes/:recipeId - one recipe joined with its creator's name
pub async fn get_recipe_details(
    State(state): State<AppState>,
    token: AuthToken,
    LenientPath(recipe_id): LenientPath,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .recipes
        .get_recipe_details(token.as_deref(), &recipe_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao buscar detalhes de uma receita"))?;

    Ok((StatusCode::OK, Json(details)))
}

/// POST /recipes - create a recipe owned by the caller
pub async fn create_recipe(
    State(state): State<AppState>,
    token: AuthToken,
    LenientJson(input): LenientJson<CreateRecipeInput>,
) -> Result<impl IntoResponse, ApiError> {
    let output = state
        .recipes
        .create_recipe(token.as_deref(), input)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao criar receita"))?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// DELETE /recipes/:recipeId - delete a recipe; only its creator may do so
pub async fn delete_recipe(
    State(state): State<AppState>,
    token: AuthToken,
    LenientPath(recipe_id): LenientPath,
) -> Result<impl IntoResponse, ApiError> {
    remove_recipe(&state, &token, &recipe_id).await
}

/// DELETE /recipes/all - the static list route shadows `:recipeId`, so the
/// literal segment is handled as an ordinary (nonexistent) id
pub async fn delete_recipe_named_all(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, ApiError> {
    remove_recipe(&state, &token, "all").await
}

async fn remove_recipe(state: &AppState, token: &AuthToken, recipe_id: &str) -> Result<impl IntoResponse, ApiError> {
    let output = state
        .recipes
        .delete_recipe(token.as_deref(), recipe_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao deletar uma receita"))?;

    Ok((StatusCode::OK, Json(output)))
}
