use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::{grupo_usuario, modalidade, profissao, unidade};

/// Row returned by the care unit listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UnidadeDto {
    /// Numeric row id
    pub id: i32,

    /// Unit name
    pub nome: Option<String>,
}

impl From<unidade::Model> for UnidadeDto {
    fn from(model: unidade::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
        }
    }
}

/// Row returned by the profession listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProfissaoDto {
    /// Numeric row id
    pub id: i32,

    /// Profession description
    pub descricao: Option<String>,
}

impl From<profissao::Model> for ProfissaoDto {
    fn from(model: profissao::Model) -> Self {
        Self {
            id: model.id,
            descricao: model.descricao,
        }
    }
}

/// Row returned by the teaching modality listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ModalidadeDto {
    /// Numeric row id
    pub id: i32,

    /// Modality description
    pub descricao: Option<String>,
}

impl From<modalidade::Model> for ModalidadeDto {
    fn from(model: modalidade::Model) -> Self {
        Self {
            id: model.id,
            descricao: model.descricao,
        }
    }
}

/// Row returned by the user group listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct GrupoUsuarioDto {
    /// Numeric row id
    pub id: i32,

    /// Group name
    pub nome: Option<String>,
}

impl From<grupo_usuario::Model> for GrupoUsuarioDto {
    fn from(model: grupo_usuario::Model) -> Self {
        Self {
            id: model.id,
            nome: model.nome,
        }
    }
}
