use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::api::auth::BearerAuth;
use crate::stores::{AtorStore, LookupStore};
use crate::services::TokenService;
use crate::types::dto::lookup::{GrupoUsuarioDto, ModalidadeDto, ProfissaoDto, UnidadeDto};
use crate::errors::api::lookup::LookupError;
use std::sync::Arc;

/// Shown in the municipality select while no record carries one yet
const DEFAULT_MUNICIPIOS: [&str; 6] = [
    "Recife",
    "Maceió",
    "Coruripe",
    "São Paulo",
    "Arapiraca",
    "Caruaru",
];

/// Read-only API endpoints that populate the intake form selects
pub struct LookupApi {
    lookup_store: Arc<LookupStore>,
    ator_store: Arc<AtorStore>,
    token_service: Arc<TokenService>,
}

impl LookupApi {
    /// Create a new LookupApi with the given stores and TokenService
    pub fn new(
        lookup_store: Arc<LookupStore>,
        ator_store: Arc<AtorStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            lookup_store,
            ator_store,
            token_service,
        }
    }
}

/// API tags for lookup endpoints
#[derive(Tags)]
enum LookupTags {
    /// Select box data sources
    Lookups,
}

#[OpenApi]
impl LookupApi {
    /// List every care unit
    #[oai(path = "/unidades", method = "get", tag = "LookupTags::Lookups")]
    pub async fn list_unidades(&self, auth: BearerAuth) -> Result<Json<Vec<UnidadeDto>>, LookupError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let unidades = self.lookup_store.list_unidades().await.map_err(|e| {
            tracing::error!(error = %e, "Listing care units failed");
            LookupError::query_failure()
        })?;

        Ok(Json(unidades.into_iter().map(UnidadeDto::from).collect()))
    }

    /// List every profession
    #[oai(path = "/profissoes", method = "get", tag = "LookupTags::Lookups")]
    pub async fn list_profissoes(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<ProfissaoDto>>, LookupError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let profissoes = self.lookup_store.list_profissoes().await.map_err(|e| {
            tracing::error!(error = %e, "Listing professions failed");
            LookupError::query_failure()
        })?;

        Ok(Json(profissoes.into_iter().map(ProfissaoDto::from).collect()))
    }

    /// List every teaching modality
    #[oai(path = "/modalidades", method = "get", tag = "LookupTags::Lookups")]
    pub async fn list_modalidades(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<ModalidadeDto>>, LookupError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let modalidades = self.lookup_store.list_modalidades().await.map_err(|e| {
            tracing::error!(error = %e, "Listing modalities failed");
            LookupError::query_failure()
        })?;

        Ok(Json(modalidades.into_iter().map(ModalidadeDto::from).collect()))
    }

    /// List every user group
    #[oai(path = "/grupos_usuario", method = "get", tag = "LookupTags::Lookups")]
    pub async fn list_grupos_usuario(
        &self,
        auth: BearerAuth,
    ) -> Result<Json<Vec<GrupoUsuarioDto>>, LookupError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let grupos = self.lookup_store.list_grupos_usuario().await.map_err(|e| {
            tracing::error!(error = %e, "Listing user groups failed");
            LookupError::query_failure()
        })?;

        Ok(Json(grupos.into_iter().map(GrupoUsuarioDto::from).collect()))
    }

    /// List the distinct municipalities already present in the registry
    #[oai(path = "/municipios", method = "get", tag = "LookupTags::Lookups")]
    pub async fn list_municipios(&self, auth: BearerAuth) -> Result<Json<Vec<String>>, LookupError> {
        // Validate JWT
        self.token_service.validate_jwt(&auth.0.token)?;

        let mut municipios = self.ator_store.distinct_municipios().await.map_err(|e| {
            tracing::error!(error = %e, "Listing municipalities failed");
            LookupError::query_failure()
        })?;

        // The select still needs options before any record exists
        if municipios.is_empty() {
            municipios = DEFAULT_MUNICIPIOS.iter().map(|m| m.to_string()).collect();
        }
        municipios.sort();

        Ok(Json(municipios))
    }
}
