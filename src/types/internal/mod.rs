// Internal types - not exposed through the API surface
pub mod ator;
pub mod auth;
