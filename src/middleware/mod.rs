pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthToken;
pub use json::LenientJson;
pub use path::LenientPath;
