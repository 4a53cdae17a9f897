// handlers/users.rs - /users endpoints (public, token acquisition)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::ApiError;
use crate::middleware::LenientJson;
use crate::services::{LoginInput, SignupInput};
use crate::state::AppState;

/// POST /users/signup - register and receive a token
///
/// Input: `{ "name": string, "email": string, "password": string }`
/// Output (201): `{ "message": "Cadastro realizado com sucesso", "token": "..." }`
pub async fn signup(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<SignupInput>,
) -> Result<impl IntoResponse, ApiError> {
    let output = state
        .users
        .signup(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao realizar cadastro"))?;

    Ok((StatusCode::CREATED, Json(output)))
}

/// POST /users/login - exchange credentials for a token
///
/// Input: `{ "email": string, "password": string }`
/// Output (200): `{ "message": "Login realizado com sucesso", "token": "..." }`
pub async fn login(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    let output = state
        .users
        .login(input)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro inesperado ao realizar login"))?;

    Ok((StatusCode::OK, Json(output)))
}
