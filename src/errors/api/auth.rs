use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use crate::errors::api::ErroResponse;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password, deliberately indistinguishable
    #[oai(status = 401)]
    InvalidCredentials(Json<ErroResponse>),

    /// Login could not be processed
    #[oai(status = 500)]
    Internal(Json<ErroResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErroResponse::new("Credenciais inválidas")))
    }

    /// Create an Internal error
    pub fn internal_error() -> Self {
        AuthError::Internal(Json(ErroResponse::new("Erro interno no servidor")))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.erro.clone(),
            AuthError::Internal(json) => json.0.erro.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
