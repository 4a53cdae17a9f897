pub mod error;
pub mod recipe_service;
pub mod user_service;
pub mod validation;

pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use recipe_service::{CreateRecipeInput, MessageOutput, RecipeService};
pub use user_service::{AuthOutput, LoginInput, SignupInput, UserService};
