// Data transfer objects - API request/response models
pub mod ator;
pub mod auth;
pub mod lookup;
