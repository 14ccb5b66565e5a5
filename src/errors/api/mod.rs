use poem_openapi::Object;

// API-facing error types
pub mod ator;
pub mod auth;
pub mod lookup;

// Re-exports for convenience
pub use ator::AtorError;
pub use auth::AuthError;
pub use lookup::LookupError;

/// Error payload returned by every failing endpoint
///
/// The body always carries the single `erro` key; clients display its
/// value verbatim, so the messages stay in Portuguese.
#[derive(Object, Debug)]
pub struct ErroResponse {
    /// Human-readable error description
    pub erro: String,
}

impl ErroResponse {
    pub fn new(erro: impl Into<String>) -> Self {
        Self { erro: erro.into() }
    }
}
