use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};

use crate::types::db::ator;
use crate::types::internal::ator::AtorLabels;

/// Transfer representation of a registry record.
///
/// The key set is fixed: the frontend consumes these names as-is, so the
/// foreign key travels as `modalidade_ensino_id` even though the entity
/// field is `modalidade_id`, and the resolved labels keep their legacy
/// names (`instituicao`, `tipo`, `modalidade`).
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct AtorDto {
    /// Numeric record id
    pub id: i32,

    /// Full name
    pub nome: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Free-form assessment text
    pub parecer: Option<String>,

    /// Lifecycle status, "Ativo" for records created through the API
    pub status: Option<String>,

    /// Municipality of residence
    pub municipio: Option<String>,

    /// Visual session identifier
    pub sessao_visual: Option<String>,

    /// Birth date in YYYY-MM-DD form
    pub data_nascimento: Option<String>,

    /// Intervention start date in YYYY-MM-DD form
    pub data_inicio_intervencao: Option<String>,

    /// Care unit reference
    pub unidade_id: Option<i32>,

    /// Profession reference
    pub profissao_id: Option<i32>,

    /// Teaching modality reference
    pub modalidade_ensino_id: Option<i32>,

    /// User group reference
    pub grupo_usuario_id: Option<i32>,

    /// Language reference, no lookup table backs it
    pub idioma_id: Option<i32>,

    /// Care unit name, "-" when the reference resolves to nothing
    pub instituicao: Option<String>,

    /// Profession description, "-" when the reference resolves to nothing
    pub tipo: Option<String>,

    /// Modality description, "-" when the reference resolves to nothing
    pub modalidade: Option<String>,
}

impl AtorDto {
    /// Builds the wire representation from a stored record and its
    /// already-resolved lookup labels.
    pub fn from_parts(model: ator::Model, labels: AtorLabels) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
            email: model.email,
            parecer: model.parecer,
            status: model.status,
            municipio: model.municipio,
            sessao_visual: model.sessao_visual,
            data_nascimento: model.data_nascimento.map(|d| d.to_string()),
            data_inicio_intervencao: model.data_inicio_intervencao.map(|d| d.to_string()),
            unidade_id: model.unidade_id,
            profissao_id: model.profissao_id,
            modalidade_ensino_id: model.modalidade_id,
            grupo_usuario_id: model.grupo_usuario_id,
            idioma_id: model.idioma_id,
            instituicao: labels.instituicao,
            tipo: labels.tipo,
            modalidade: labels.modalidade,
        }
    }
}

/// Request model for creating a registry record.
///
/// Every field is optional; the handler rejects a payload in which all of
/// them are absent. Three keys use the intake form's names rather than the
/// stored ones: `cidade` lands in `municipio`, `ano_sessao` in
/// `sessao_visual` and `modalidade_ensino_id` in `modalidade_id`.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct CreateAtorRequest {
    /// Full name
    pub nome: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Municipality of residence, stored as `municipio`
    pub cidade: Option<String>,

    /// Street address
    pub endereco: Option<String>,

    /// State of residence
    pub estado: Option<String>,

    /// Country of residence
    pub pais: Option<String>,

    /// System username
    pub username: Option<String>,

    /// Visual session identifier, stored as `sessao_visual`
    pub ano_sessao: Option<String>,

    /// Free-form assessment text
    pub parecer: Option<String>,

    /// Birth date in YYYY-MM-DD form
    pub data_nascimento: Option<String>,

    /// Intervention start date in YYYY-MM-DD form
    pub data_inicio_intervencao: Option<String>,

    /// Care unit reference
    pub unidade_id: Option<i32>,

    /// Profession reference
    pub profissao_id: Option<i32>,

    /// Teaching modality reference, stored as `modalidade_id`
    pub modalidade_ensino_id: Option<i32>,

    /// User group reference
    pub grupo_usuario_id: Option<i32>,

    /// Language reference
    pub idioma_id: Option<i32>,
}

impl CreateAtorRequest {
    /// True when no field carries a value, which the create endpoint
    /// treats the same as a missing payload.
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.email.is_none()
            && self.cidade.is_none()
            && self.endereco.is_none()
            && self.estado.is_none()
            && self.pais.is_none()
            && self.username.is_none()
            && self.ano_sessao.is_none()
            && self.parecer.is_none()
            && self.data_nascimento.is_none()
            && self.data_inicio_intervencao.is_none()
            && self.unidade_id.is_none()
            && self.profissao_id.is_none()
            && self.modalidade_ensino_id.is_none()
            && self.grupo_usuario_id.is_none()
            && self.idioma_id.is_none()
    }
}

/// Request model for a partial update of a registry record.
///
/// Absent fields keep their stored values; present fields overwrite them.
/// The same external key translation as the create payload applies.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct UpdateAtorRequest {
    /// Full name
    pub nome: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Municipality of residence, stored as `municipio`
    pub cidade: Option<String>,

    /// Street address
    pub endereco: Option<String>,

    /// State of residence
    pub estado: Option<String>,

    /// Country of residence
    pub pais: Option<String>,

    /// System username
    pub username: Option<String>,

    /// Visual session identifier, stored as `sessao_visual`
    pub ano_sessao: Option<String>,

    /// Free-form assessment text
    pub parecer: Option<String>,

    /// Birth date in YYYY-MM-DD form
    pub data_nascimento: Option<String>,

    /// Intervention start date in YYYY-MM-DD form
    pub data_inicio_intervencao: Option<String>,

    /// Care unit reference
    pub unidade_id: Option<i32>,

    /// Profession reference
    pub profissao_id: Option<i32>,

    /// Teaching modality reference, stored as `modalidade_id`
    pub modalidade_ensino_id: Option<i32>,

    /// User group reference
    pub grupo_usuario_id: Option<i32>,

    /// Language reference
    pub idioma_id: Option<i32>,
}

/// Response model confirming a stored record
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AtorCriadoResponse {
    /// Confirmation message
    pub mensagem: String,

    /// Id of the newly stored record
    pub id: i32,
}

/// Response model carrying a bare confirmation message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MensagemResponse {
    /// Confirmation message
    pub mensagem: String,
}

/// API response for the create endpoint
#[derive(ApiResponse)]
pub enum CreateAtorApiResponse {
    /// Record stored, id returned
    #[oai(status = 201)]
    Created(Json<AtorCriadoResponse>),
}
