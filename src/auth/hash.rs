use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),
    #[error("Hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Argon2id password hashing. Work runs on the blocking pool so request
/// tasks are not stalled.
#[derive(Debug, Clone, Default)]
pub struct HashManager;

impl HashManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&plaintext)).await?
    }

    pub async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash)).await?
    }
}

fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HashError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(hash).map_err(|e| HashError::InvalidHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_compare_correct() {
        let manager = HashManager::new();
        let hash = manager.hash("abcdef").await.unwrap();
        assert_ne!(hash, "abcdef");
        assert!(manager.compare("abcdef", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn compare_wrong_password() {
        let manager = HashManager::new();
        let hash = manager.hash("abcdef").await.unwrap();
        assert!(!manager.compare("abcdeg", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn salts_differ() {
        let manager = HashManager::new();
        let a = manager.hash("same-password").await.unwrap();
        let b = manager.hash("same-password").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let manager = HashManager::new();
        assert!(matches!(
            manager.compare("abcdef", "plain-text").await,
            Err(HashError::InvalidHash(_))
        ));
    }
}
