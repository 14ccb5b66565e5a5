use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use crate::errors::api::ErroResponse;
use crate::errors::internal::TokenError;

/// Registry endpoint error types
///
/// Each write operation keeps its own 500 message so the frontend can
/// show the same wording it always has.
#[derive(ApiResponse, Debug)]
pub enum AtorError {
    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErroResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErroResponse>),

    /// Create payload absent or carrying no fields
    #[oai(status = 400)]
    MissingPayload(Json<ErroResponse>),

    /// No record with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErroResponse>),

    /// Create failed at the storage layer
    #[oai(status = 500)]
    SaveFailure(Json<ErroResponse>),

    /// Update failed at the storage layer
    #[oai(status = 500)]
    UpdateFailure(Json<ErroResponse>),

    /// Delete failed at the storage layer
    #[oai(status = 500)]
    DeleteFailure(Json<ErroResponse>),

    /// Read failed at the storage layer
    #[oai(status = 500)]
    QueryFailure(Json<ErroResponse>),

    /// Anything else that should not leak detail
    #[oai(status = 500)]
    Internal(Json<ErroResponse>),
}

impl AtorError {
    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AtorError::InvalidToken(Json(ErroResponse::new("Token inválido ou malformado")))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AtorError::ExpiredToken(Json(ErroResponse::new("Token expirado")))
    }

    /// Create a MissingPayload error
    pub fn missing_payload() -> Self {
        AtorError::MissingPayload(Json(ErroResponse::new("Dados não fornecidos")))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        AtorError::NotFound(Json(ErroResponse::new("Ator não encontrado")))
    }

    /// Create a SaveFailure error
    pub fn save_failure() -> Self {
        AtorError::SaveFailure(Json(ErroResponse::new("Erro ao salvar no banco")))
    }

    /// Create an UpdateFailure error
    pub fn update_failure() -> Self {
        AtorError::UpdateFailure(Json(ErroResponse::new("Erro ao atualizar registro")))
    }

    /// Create a DeleteFailure error
    pub fn delete_failure() -> Self {
        AtorError::DeleteFailure(Json(ErroResponse::new("Erro ao deletar.")))
    }

    /// Create a QueryFailure error
    pub fn query_failure() -> Self {
        AtorError::QueryFailure(Json(ErroResponse::new("Erro ao consultar o banco")))
    }

    /// Create an Internal error
    pub fn internal_error() -> Self {
        AtorError::Internal(Json(ErroResponse::new("Erro interno no servidor")))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AtorError::InvalidToken(json) => json.0.erro.clone(),
            AtorError::ExpiredToken(json) => json.0.erro.clone(),
            AtorError::MissingPayload(json) => json.0.erro.clone(),
            AtorError::NotFound(json) => json.0.erro.clone(),
            AtorError::SaveFailure(json) => json.0.erro.clone(),
            AtorError::UpdateFailure(json) => json.0.erro.clone(),
            AtorError::DeleteFailure(json) => json.0.erro.clone(),
            AtorError::QueryFailure(json) => json.0.erro.clone(),
            AtorError::Internal(json) => json.0.erro.clone(),
        }
    }
}

impl fmt::Display for AtorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<TokenError> for AtorError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AtorError::expired_token(),
            TokenError::Invalid => AtorError::invalid_token(),
            TokenError::Creation(_) => AtorError::internal_error(),
        }
    }
}
