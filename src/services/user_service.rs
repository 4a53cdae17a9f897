use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::{Authenticator, HashManager, IdGenerator, TokenPayload};
use crate::database::models::User;
use crate::database::{DatabaseError, UserRepository};

use super::error::{ServiceError, ServiceResult};
use super::validation::{require_email, require_min_length, require_string};

/// Raw signup body. Fields stay untyped so a non-string value is reported as
/// a validation failure rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct SignupInput {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutput {
    pub message: String,
    pub token: String,
}

/// Signup and login use cases
pub struct UserService {
    users: Arc<dyn UserRepository>,
    ids: IdGenerator,
    hasher: HashManager,
    authenticator: Arc<Authenticator>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        ids: IdGenerator,
        hasher: HashManager,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            users,
            ids,
            hasher,
            authenticator,
        }
    }

    pub async fn signup(&self, input: SignupInput) -> ServiceResult<AuthOutput> {
        let name = require_string(input.name.as_ref(), "name")?;
        let email = require_string(input.email.as_ref(), "email")?;
        let password = require_string(input.password.as_ref(), "password")?;

        require_min_length(name, "name", 3)?;
        require_min_length(password, "password", 6)?;
        require_email(email)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(ServiceError::bad_request("Email já cadastrado"));
        }

        let user = User {
            id: self.ids.generate(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password).await?,
        };

        // A concurrent signup may win the race between the lookup and the insert
        match self.users.create_user(&user).await {
            Ok(()) => {}
            Err(DatabaseError::DuplicateEmail(_)) => {
                return Err(ServiceError::bad_request("Email já cadastrado"));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!("User {} signed up", user.id);

        let token = self.authenticator.generate_token(&TokenPayload {
            id: user.id,
            name: user.name,
        })?;

        Ok(AuthOutput {
            message: "Cadastro realizado com sucesso".to_string(),
            token,
        })
    }

    pub async fn login(&self, input: LoginInput) -> ServiceResult<AuthOutput> {
        let email = require_string(input.email.as_ref(), "email")?;
        let password = require_string(input.password.as_ref(), "password")?;

        require_min_length(password, "password", 6)?;
        require_email(email)?;

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("Email não cadastrado"))?;

        if !self.hasher.compare(password, &user.password_hash).await? {
            tracing::warn!("Failed login for user {}", user.id);
            return Err(ServiceError::unauthorized("Password incorreto"));
        }

        tracing::debug!("User {} logged in", user.id);

        let token = self.authenticator.generate_token(&TokenPayload {
            id: user.id,
            name: user.name,
        })?;

        Ok(AuthOutput {
            message: "Login realizado com sucesso".to_string(),
            token,
        })
    }
}
