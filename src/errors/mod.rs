// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{AtorError, AuthError, ErroResponse, LookupError};
pub use internal::{InternalError, TokenError};
