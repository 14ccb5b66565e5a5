// API layer - HTTP endpoints
pub mod atores;
pub mod auth;
pub mod lookups;

pub use atores::AtorApi;
pub use auth::{AuthApi, BearerAuth};
pub use lookups::LookupApi;
