pub mod recipe;
pub mod user;

pub use recipe::{Recipe, RecipeDetails, RecipeSummary};
pub use user::User;
