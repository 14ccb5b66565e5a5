use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use crate::errors::api::ErroResponse;
use crate::errors::internal::TokenError;

/// Lookup endpoint error types
#[derive(ApiResponse, Debug)]
pub enum LookupError {
    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErroResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErroResponse>),

    /// Read failed at the storage layer
    #[oai(status = 500)]
    QueryFailure(Json<ErroResponse>),

    /// Anything else that should not leak detail
    #[oai(status = 500)]
    Internal(Json<ErroResponse>),
}

impl LookupError {
    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        LookupError::InvalidToken(Json(ErroResponse::new("Token inválido ou malformado")))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        LookupError::ExpiredToken(Json(ErroResponse::new("Token expirado")))
    }

    /// Create a QueryFailure error
    pub fn query_failure() -> Self {
        LookupError::QueryFailure(Json(ErroResponse::new("Erro ao consultar o banco")))
    }

    /// Create an Internal error
    pub fn internal_error() -> Self {
        LookupError::Internal(Json(ErroResponse::new("Erro interno no servidor")))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            LookupError::InvalidToken(json) => json.0.erro.clone(),
            LookupError::ExpiredToken(json) => json.0.erro.clone(),
            LookupError::QueryFailure(json) => json.0.erro.clone(),
            LookupError::Internal(json) => json.0.erro.clone(),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<TokenError> for LookupError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => LookupError::expired_token(),
            TokenError::Invalid => LookupError::invalid_token(),
            TokenError::Creation(_) => LookupError::internal_error(),
        }
    }
}
