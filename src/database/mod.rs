pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

use std::sync::Arc;

use sqlx::PgPool;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::InMemoryStore;
pub use repository::{RecipeRepository, UserRepository};

/// The backing store selected at startup
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory(Arc<InMemoryStore>),
}

impl Storage {
    pub fn memory() -> Self {
        Storage::Memory(Arc::new(InMemoryStore::new()))
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        match self {
            Storage::Postgres(pool) => Arc::new(postgres::PgUserRepository::new(pool.clone())),
            Storage::Memory(store) => store.clone(),
        }
    }

    pub fn recipes(&self) -> Arc<dyn RecipeRepository> {
        match self {
            Storage::Postgres(pool) => Arc::new(postgres::PgRecipeRepository::new(pool.clone())),
            Storage::Memory(store) => store.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Storage::Postgres(_) => "postgres",
            Storage::Memory(_) => "memory",
        }
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        match self {
            Storage::Postgres(pool) => DatabaseManager::health_check(pool).await,
            Storage::Memory(_) => Ok(()),
        }
    }
}
