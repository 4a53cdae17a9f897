// handlers/mod.rs - HTTP adaptation layer
//
// Public:    /users/signup, /users/login, /health
// Protected: /recipes/* (token checked inside each use case)

pub mod health;
pub mod recipes;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the full router. `enable_cors` adds a permissive CORS layer.
pub fn app(state: AppState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health::health))
        .merge(user_routes())
        .merge(recipe_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
}

fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(recipes::create_recipe))
        .route(
            "/recipes/all",
            get(recipes::list_recipes).delete(recipes::delete_recipe_named_all),
        )
        .route(
            "/recipes/:recipeId",
            get(recipes::get_recipe_details).delete(recipes::delete_recipe),
        )
}
