use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::api::auth::BearerAuth;
use crate::stores::AtorStore;
use crate::services::TokenService;
use crate::types::dto::ator::{
    AtorCriadoResponse, AtorDto, CreateAtorApiResponse, CreateAtorRequest, MensagemResponse,
    UpdateAtorRequest,
};
use crate::errors::api::ator::AtorError;
use std::sync::Arc;

/// Registry API endpoints for Ator records
pub struct AtorApi {
    ator_store: Arc<AtorStore>,
    token_service: Arc<TokenService>,
}

impl AtorApi {
    /// Create a new AtorApi with the given AtorStore and TokenService
    pub fn new(ator_store: Arc<AtorStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            ator_store,
            token_service,
        }
    }
}

/// API tags for registry endpoints
#[derive(Tags)]
enum AtorTags {
    /// Care registry records
    Atores,
}

#[OpenApi]
impl AtorApi {
    /// List every registry record with its resolved lookup labels
    #[oai(path = "/atores", method = "get", tag = "AtorTags::Atores")]
    pub async fn list_atores(&self, auth: BearerAuth) -> Result<Json<Vec<AtorDto>>, AtorError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let atores = self.ator_store.list().await.map_err(|e| {
            tracing::error!(error = %e, "Listing registry records failed");
            AtorError::query_failure()
        })?;

        Ok(Json(
            atores
                .into_iter()
                .map(|(model, labels)| AtorDto::from_parts(model, labels))
                .collect(),
        ))
    }

    /// Fetch a single registry record by id
    #[oai(path = "/atores/:id", method = "get", tag = "AtorTags::Atores")]
    pub async fn get_ator(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<AtorDto>, AtorError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let found = self.ator_store.get(id.0).await.map_err(|e| {
            tracing::error!(error = %e, ator_id = id.0, "Loading registry record failed");
            AtorError::query_failure()
        })?;

        let Some((model, labels)) = found else {
            return Err(AtorError::not_found());
        };

        Ok(Json(AtorDto::from_parts(model, labels)))
    }

    /// Store a new registry record
    #[oai(path = "/atores", method = "post", tag = "AtorTags::Atores")]
    pub async fn create_ator(
        &self,
        auth: BearerAuth,
        body: Json<CreateAtorRequest>,
    ) -> Result<CreateAtorApiResponse, AtorError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        // A payload with no fields at all is treated as missing
        if body.is_empty() {
            return Err(AtorError::missing_payload());
        }

        let id = self.ator_store.create(&body.0).await.map_err(|e| {
            tracing::error!(error = %e, "Storing registry record failed");
            AtorError::save_failure()
        })?;

        tracing::info!(ator_id = id, "Registry record created");

        Ok(CreateAtorApiResponse::Created(Json(AtorCriadoResponse {
            mensagem: "Ator criado com sucesso".to_string(),
            id,
        })))
    }

    /// Apply a partial update to an existing registry record
    #[oai(path = "/atores/:id", method = "put", tag = "AtorTags::Atores")]
    pub async fn update_ator(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateAtorRequest>,
    ) -> Result<Json<MensagemResponse>, AtorError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let updated = self.ator_store.update(id.0, &body.0).await.map_err(|e| {
            tracing::error!(error = %e, ator_id = id.0, "Updating registry record failed");
            AtorError::update_failure()
        })?;

        if !updated {
            return Err(AtorError::not_found());
        }

        tracing::info!(ator_id = id.0, "Registry record updated");

        Ok(Json(MensagemResponse {
            mensagem: "Ator atualizado com sucesso".to_string(),
        }))
    }

    /// Permanently remove a registry record
    #[oai(path = "/atores/:id", method = "delete", tag = "AtorTags::Atores")]
    pub async fn delete_ator(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<MensagemResponse>, AtorError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let deleted = self.ator_store.delete(id.0).await.map_err(|e| {
            tracing::error!(error = %e, ator_id = id.0, "Deleting registry record failed");
            AtorError::delete_failure()
        })?;

        if !deleted {
            return Err(AtorError::not_found());
        }

        tracing::info!(ator_id = id.0, "Registry record deleted");

        Ok(Json(MensagemResponse {
            mensagem: "Ator removido com sucesso".to_string(),
        }))
    }
}
