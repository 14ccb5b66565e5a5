use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::internal::InternalError;
use crate::types::db::grupo_usuario::{self, Entity as GrupoUsuario};
use crate::types::db::modalidade::{self, Entity as Modalidade};
use crate::types::db::profissao::{self, Entity as Profissao};
use crate::types::db::unidade::{self, Entity as Unidade};

/// LookupStore reads the normalization tables that feed the frontend's
/// selection widgets. The tables are populated out of band; nothing here
/// writes.
pub struct LookupStore {
    db: DatabaseConnection,
}

impl LookupStore {
    /// Create a new LookupStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every care unit, in storage order
    pub async fn list_unidades(&self) -> Result<Vec<unidade::Model>, InternalError> {
        Unidade::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_unidades", e))
    }

    /// Every profession, in storage order
    pub async fn list_profissoes(&self) -> Result<Vec<profissao::Model>, InternalError> {
        Profissao::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_profissoes", e))
    }

    /// Every teaching modality, in storage order
    pub async fn list_modalidades(&self) -> Result<Vec<modalidade::Model>, InternalError> {
        Modalidade::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_modalidades", e))
    }

    /// Every user group, in storage order
    pub async fn list_grupos_usuario(&self) -> Result<Vec<grupo_usuario::Model>, InternalError> {
        GrupoUsuario::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_grupos_usuario", e))
    }
}
