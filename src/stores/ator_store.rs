use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;

use crate::errors::internal::InternalError;
use crate::types::db::ator::{self, Entity as Ator};
use crate::types::db::modalidade::{self, Entity as Modalidade};
use crate::types::db::profissao::{self, Entity as Profissao};
use crate::types::db::unidade::{self, Entity as Unidade};
use crate::types::dto::ator::{CreateAtorRequest, UpdateAtorRequest};
use crate::types::internal::ator::AtorLabels;

/// Wire value for a reference that resolves to nothing
const LABEL_PLACEHOLDER: &str = "-";

/// Lookup labels fetched in bulk for a batch of registry records
struct LabelMaps {
    unidades: HashMap<i32, Option<String>>,
    profissoes: HashMap<i32, Option<String>>,
    modalidades: HashMap<i32, Option<String>>,
}

/// AtorStore manages registry records and their lookup labels
pub struct AtorStore {
    db: DatabaseConnection,
}

impl AtorStore {
    /// Create a new AtorStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch every registry record with its resolved labels
    ///
    /// Labels are loaded with one query per lookup table rather than one
    /// per record.
    pub async fn list(&self) -> Result<Vec<(ator::Model, AtorLabels)>, InternalError> {
        let models = Ator::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_atores", e))?;

        let maps = self.load_label_maps(&models).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let labels = resolve_labels(&model, &maps);
                (model, labels)
            })
            .collect())
    }

    /// Fetch one registry record with its resolved labels
    ///
    /// # Returns
    /// * `Ok(Some(..))` - The record and its labels
    /// * `Ok(None)` - No record with that id
    /// * `Err(InternalError)` - Database failure
    pub async fn get(&self, id: i32) -> Result<Option<(ator::Model, AtorLabels)>, InternalError> {
        let Some(model) = Ator::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_ator", e))?
        else {
            return Ok(None);
        };

        let maps = self.load_label_maps(std::slice::from_ref(&model)).await?;
        let labels = resolve_labels(&model, &maps);

        Ok(Some((model, labels)))
    }

    /// Insert a new registry record from the intake payload
    ///
    /// The payload's `cidade` value lands in the `municipio` column and
    /// `ano_sessao` in `sessao_visual`; `status` is forced to "Ativo" no
    /// matter what the caller sent.
    ///
    /// # Returns
    /// * `Ok(id)` - The id of the inserted record
    /// * `Err(InternalError)` - Date parse or database failure
    pub async fn create(&self, payload: &CreateAtorRequest) -> Result<i32, InternalError> {
        let data_nascimento = parse_optional_date("data_nascimento", &payload.data_nascimento)?;
        let data_inicio_intervencao =
            parse_optional_date("data_inicio_intervencao", &payload.data_inicio_intervencao)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_create_ator", e))?;

        let new_ator = ator::ActiveModel {
            id: NotSet,
            nome: Set(payload.nome.clone()),
            email: Set(payload.email.clone()),
            sessao_visual: Set(payload.ano_sessao.clone()),
            idade_visual: Set(None),
            municipio: Set(payload.cidade.clone()),
            endereco: Set(payload.endereco.clone()),
            cidade: Set(None),
            estado: Set(payload.estado.clone()),
            pais: Set(payload.pais.clone()),
            status: Set(Some("Ativo".to_string())),
            data_nascimento: Set(data_nascimento),
            data_inicio_intervencao: Set(data_inicio_intervencao),
            username: Set(payload.username.clone()),
            parecer: Set(payload.parecer.clone()),
            unidade_id: Set(payload.unidade_id),
            profissao_id: Set(payload.profissao_id),
            modalidade_id: Set(payload.modalidade_ensino_id),
            grupo_usuario_id: Set(payload.grupo_usuario_id),
            idioma_id: Set(payload.idioma_id),
        };

        let inserted = new_ator
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("insert_ator", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_create_ator", e))?;

        Ok(inserted.id)
    }

    /// Apply a partial update to a registry record
    ///
    /// Only fields present in the payload are written; absent fields keep
    /// their stored values.
    ///
    /// # Returns
    /// * `Ok(true)` - The record existed and was updated
    /// * `Ok(false)` - No record with that id
    /// * `Err(InternalError)` - Date parse or database failure
    pub async fn update(
        &self,
        id: i32,
        payload: &UpdateAtorRequest,
    ) -> Result<bool, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_update_ator", e))?;

        let Some(existing) = Ator::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_ator_for_update", e))?
        else {
            return Ok(false);
        };

        // A missing record wins over a bad payload, so dates are parsed
        // only once the row is in hand.
        let data_nascimento = parse_optional_date("data_nascimento", &payload.data_nascimento)?;
        let data_inicio_intervencao =
            parse_optional_date("data_inicio_intervencao", &payload.data_inicio_intervencao)?;

        let mut active: ator::ActiveModel = existing.into();
        let mut changed = false;

        if let Some(nome) = &payload.nome {
            active.nome = Set(Some(nome.clone()));
            changed = true;
        }
        if let Some(email) = &payload.email {
            active.email = Set(Some(email.clone()));
            changed = true;
        }
        if let Some(cidade) = &payload.cidade {
            active.municipio = Set(Some(cidade.clone()));
            changed = true;
        }
        if let Some(endereco) = &payload.endereco {
            active.endereco = Set(Some(endereco.clone()));
            changed = true;
        }
        if let Some(estado) = &payload.estado {
            active.estado = Set(Some(estado.clone()));
            changed = true;
        }
        if let Some(pais) = &payload.pais {
            active.pais = Set(Some(pais.clone()));
            changed = true;
        }
        if let Some(username) = &payload.username {
            active.username = Set(Some(username.clone()));
            changed = true;
        }
        if let Some(ano_sessao) = &payload.ano_sessao {
            active.sessao_visual = Set(Some(ano_sessao.clone()));
            changed = true;
        }
        if let Some(parecer) = &payload.parecer {
            active.parecer = Set(Some(parecer.clone()));
            changed = true;
        }
        if let Some(date) = data_nascimento {
            active.data_nascimento = Set(Some(date));
            changed = true;
        }
        if let Some(date) = data_inicio_intervencao {
            active.data_inicio_intervencao = Set(Some(date));
            changed = true;
        }
        if let Some(unidade_id) = payload.unidade_id {
            active.unidade_id = Set(Some(unidade_id));
            changed = true;
        }
        if let Some(profissao_id) = payload.profissao_id {
            active.profissao_id = Set(Some(profissao_id));
            changed = true;
        }
        if let Some(modalidade_id) = payload.modalidade_ensino_id {
            active.modalidade_id = Set(Some(modalidade_id));
            changed = true;
        }
        if let Some(grupo_usuario_id) = payload.grupo_usuario_id {
            active.grupo_usuario_id = Set(Some(grupo_usuario_id));
            changed = true;
        }
        if let Some(idioma_id) = payload.idioma_id {
            active.idioma_id = Set(Some(idioma_id));
            changed = true;
        }

        // With no fields present there is nothing to write; the empty
        // update still counts as success.
        if changed {
            active
                .update(&txn)
                .await
                .map_err(|e| InternalError::database("update_ator", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_update_ator", e))?;

        Ok(true)
    }

    /// Permanently remove a registry record
    ///
    /// # Returns
    /// * `Ok(true)` - The record existed and was deleted
    /// * `Ok(false)` - No record with that id
    /// * `Err(InternalError)` - Database failure
    pub async fn delete(&self, id: i32) -> Result<bool, InternalError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_delete_ator", e))?;

        let Some(existing) = Ator::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("find_ator_for_delete", e))?
        else {
            return Ok(false);
        };

        existing
            .delete(&txn)
            .await
            .map_err(|e| InternalError::database("delete_ator", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_delete_ator", e))?;

        Ok(true)
    }

    /// Distinct non-empty municipality values across all records
    ///
    /// Order is whatever the database returns; the caller sorts.
    pub async fn distinct_municipios(&self) -> Result<Vec<String>, InternalError> {
        let values: Vec<Option<String>> = Ator::find()
            .select_only()
            .column(ator::Column::Municipio)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("distinct_municipios", e))?;

        Ok(values
            .into_iter()
            .flatten()
            .filter(|municipio| !municipio.is_empty())
            .collect())
    }

    /// Bulk-load the label columns referenced by a batch of records
    async fn load_label_maps(&self, models: &[ator::Model]) -> Result<LabelMaps, InternalError> {
        let unidade_ids: Vec<i32> = models.iter().filter_map(|m| m.unidade_id).collect();
        let profissao_ids: Vec<i32> = models.iter().filter_map(|m| m.profissao_id).collect();
        let modalidade_ids: Vec<i32> = models.iter().filter_map(|m| m.modalidade_id).collect();

        let unidades = if unidade_ids.is_empty() {
            HashMap::new()
        } else {
            Unidade::find()
                .filter(unidade::Column::Id.is_in(unidade_ids))
                .all(&self.db)
                .await
                .map_err(|e| InternalError::database("load_unidade_labels", e))?
                .into_iter()
                .map(|row| (row.id, row.nome))
                .collect()
        };

        let profissoes = if profissao_ids.is_empty() {
            HashMap::new()
        } else {
            Profissao::find()
                .filter(profissao::Column::Id.is_in(profissao_ids))
                .all(&self.db)
                .await
                .map_err(|e| InternalError::database("load_profissao_labels", e))?
                .into_iter()
                .map(|row| (row.id, row.descricao))
                .collect()
        };

        let modalidades = if modalidade_ids.is_empty() {
            HashMap::new()
        } else {
            Modalidade::find()
                .filter(modalidade::Column::Id.is_in(modalidade_ids))
                .all(&self.db)
                .await
                .map_err(|e| InternalError::database("load_modalidade_labels", e))?
                .into_iter()
                .map(|row| (row.id, row.descricao))
                .collect()
        };

        Ok(LabelMaps {
            unidades,
            profissoes,
            modalidades,
        })
    }
}

/// Resolve the three label fields for one record from preloaded maps
fn resolve_labels(model: &ator::Model, maps: &LabelMaps) -> AtorLabels {
    AtorLabels {
        instituicao: resolve_label(model.unidade_id, &maps.unidades),
        tipo: resolve_label(model.profissao_id, &maps.profissoes),
        modalidade: resolve_label(model.modalidade_id, &maps.modalidades),
    }
}

/// Label for one reference: the placeholder when the reference is unset
/// or its target row is missing, otherwise the target's label column,
/// null and all.
fn resolve_label(fk: Option<i32>, labels_by_id: &HashMap<i32, Option<String>>) -> Option<String> {
    match fk.and_then(|id| labels_by_id.get(&id)) {
        None => Some(LABEL_PLACEHOLDER.to_string()),
        Some(label) => label.clone(),
    }
}

/// Parse an optional YYYY-MM-DD payload value into a calendar date
fn parse_optional_date(
    field: &str,
    value: &Option<String>,
) -> Result<Option<NaiveDate>, InternalError> {
    match value {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| InternalError::parse(field, format!("{:?}: {}", raw, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> (DatabaseConnection, AtorStore) {
        // Create in-memory SQLite database for testing
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let ator_store = AtorStore::new(db.clone());

        (db, ator_store)
    }

    async fn seed_unidade(db: &DatabaseConnection, nome: Option<&str>) -> i32 {
        let row = unidade::ActiveModel {
            id: NotSet,
            nome: Set(nome.map(|s| s.to_string())),
        };
        row.insert(db).await.unwrap().id
    }

    async fn seed_profissao(db: &DatabaseConnection, descricao: Option<&str>) -> i32 {
        let row = profissao::ActiveModel {
            id: NotSet,
            descricao: Set(descricao.map(|s| s.to_string())),
        };
        row.insert(db).await.unwrap().id
    }

    async fn seed_modalidade(db: &DatabaseConnection, descricao: Option<&str>) -> i32 {
        let row = modalidade::ActiveModel {
            id: NotSet,
            descricao: Set(descricao.map(|s| s.to_string())),
        };
        row.insert(db).await.unwrap().id
    }

    #[tokio::test]
    async fn test_create_translates_external_keys() {
        let (db, ator_store) = setup_test_db().await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            cidade: Some("Recife".to_string()),
            ano_sessao: Some("2024".to_string()),
            ..Default::default()
        };

        let id = ator_store.create(&payload).await.unwrap();

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.nome.as_deref(), Some("Maria Silva"));
        assert_eq!(stored.municipio.as_deref(), Some("Recife"));
        assert_eq!(stored.sessao_visual.as_deref(), Some("2024"));
        // The intake form's city value feeds municipio only
        assert!(stored.cidade.is_none());
    }

    #[tokio::test]
    async fn test_create_forces_status_ativo() {
        let (db, ator_store) = setup_test_db().await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            ..Default::default()
        };

        let id = ator_store.create(&payload).await.unwrap();

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.status.as_deref(), Some("Ativo"));
    }

    #[tokio::test]
    async fn test_create_parses_dates() {
        let (db, ator_store) = setup_test_db().await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            data_nascimento: Some("1990-05-17".to_string()),
            data_inicio_intervencao: Some("2024-01-02".to_string()),
            ..Default::default()
        };

        let id = ator_store.create(&payload).await.unwrap();

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(
            stored.data_nascimento,
            Some(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap())
        );
        assert_eq!(
            stored.data_inicio_intervencao,
            Some(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        );
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_date() {
        let (db, ator_store) = setup_test_db().await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            data_nascimento: Some("17/05/1990".to_string()),
            ..Default::default()
        };

        let result = ator_store.create(&payload).await;

        assert!(matches!(result, Err(InternalError::Parse { .. })));

        // Nothing was persisted
        let rows = Ator::find().all(&db).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_get_returns_none_for_unknown_id() {
        let (_db, ator_store) = setup_test_db().await;

        let found = ator_store.get(9999).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_resolves_labels_from_lookup_tables() {
        let (db, ator_store) = setup_test_db().await;

        let unidade_id = seed_unidade(&db, Some("Unidade Centro")).await;
        let profissao_id = seed_profissao(&db, Some("Psicóloga")).await;
        let modalidade_id = seed_modalidade(&db, Some("Presencial")).await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            unidade_id: Some(unidade_id),
            profissao_id: Some(profissao_id),
            modalidade_ensino_id: Some(modalidade_id),
            ..Default::default()
        };
        let id = ator_store.create(&payload).await.unwrap();

        let (model, labels) = ator_store.get(id).await.unwrap().unwrap();

        assert_eq!(model.modalidade_id, Some(modalidade_id));
        assert_eq!(labels.instituicao.as_deref(), Some("Unidade Centro"));
        assert_eq!(labels.tipo.as_deref(), Some("Psicóloga"));
        assert_eq!(labels.modalidade.as_deref(), Some("Presencial"));
    }

    #[tokio::test]
    async fn test_get_uses_placeholder_for_unset_references() {
        let (_db, ator_store) = setup_test_db().await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            ..Default::default()
        };
        let id = ator_store.create(&payload).await.unwrap();

        let (_, labels) = ator_store.get(id).await.unwrap().unwrap();

        assert_eq!(labels.instituicao.as_deref(), Some("-"));
        assert_eq!(labels.tipo.as_deref(), Some("-"));
        assert_eq!(labels.modalidade.as_deref(), Some("-"));
    }

    #[tokio::test]
    async fn test_get_keeps_null_label_when_lookup_row_is_unnamed() {
        let (db, ator_store) = setup_test_db().await;

        let unidade_id = seed_unidade(&db, None).await;

        let payload = CreateAtorRequest {
            nome: Some("Maria Silva".to_string()),
            unidade_id: Some(unidade_id),
            ..Default::default()
        };
        let id = ator_store.create(&payload).await.unwrap();

        let (_, labels) = ator_store.get(id).await.unwrap().unwrap();

        // The row exists, its label column is just empty
        assert_eq!(labels.instituicao, None);
    }

    #[test]
    fn test_resolve_label_placeholder_for_missing_target_row() {
        let labels_by_id: HashMap<i32, Option<String>> = HashMap::new();

        let label = resolve_label(Some(999), &labels_by_id);

        assert_eq!(label.as_deref(), Some("-"));
    }

    #[test]
    fn test_resolve_label_reads_named_target_row() {
        let mut labels_by_id = HashMap::new();
        labels_by_id.insert(3, Some("Unidade Norte".to_string()));

        assert_eq!(
            resolve_label(Some(3), &labels_by_id).as_deref(),
            Some("Unidade Norte")
        );
        assert_eq!(resolve_label(None, &labels_by_id).as_deref(), Some("-"));
    }

    #[tokio::test]
    async fn test_list_returns_all_records_with_labels() {
        let (db, ator_store) = setup_test_db().await;

        let unidade_id = seed_unidade(&db, Some("Unidade Centro")).await;

        ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria".to_string()),
                unidade_id: Some(unidade_id),
                ..Default::default()
            })
            .await
            .unwrap();
        ator_store
            .create(&CreateAtorRequest {
                nome: Some("João".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let rows = ator_store.list().await.unwrap();

        assert_eq!(rows.len(), 2);
        let maria = rows
            .iter()
            .find(|(m, _)| m.nome.as_deref() == Some("Maria"))
            .unwrap();
        assert_eq!(maria.1.instituicao.as_deref(), Some("Unidade Centro"));
        let joao = rows
            .iter()
            .find(|(m, _)| m.nome.as_deref() == Some("João"))
            .unwrap();
        assert_eq!(joao.1.instituicao.as_deref(), Some("-"));
    }

    #[tokio::test]
    async fn test_update_changes_only_present_fields() {
        let (db, ator_store) = setup_test_db().await;

        let id = ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria Silva".to_string()),
                email: Some("maria@exemplo.net".to_string()),
                cidade: Some("Recife".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = ator_store
            .update(
                id,
                &UpdateAtorRequest {
                    nome: Some("Maria Souza".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated);

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.nome.as_deref(), Some("Maria Souza"));
        // Untouched fields keep their values
        assert_eq!(stored.email.as_deref(), Some("maria@exemplo.net"));
        assert_eq!(stored.municipio.as_deref(), Some("Recife"));
    }

    #[tokio::test]
    async fn test_update_translates_external_keys() {
        let (db, ator_store) = setup_test_db().await;

        let id = ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria Silva".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        ator_store
            .update(
                id,
                &UpdateAtorRequest {
                    cidade: Some("Caruaru".to_string()),
                    ano_sessao: Some("2025".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.municipio.as_deref(), Some("Caruaru"));
        assert_eq!(stored.sessao_visual.as_deref(), Some("2025"));
    }

    #[tokio::test]
    async fn test_update_returns_false_for_unknown_id() {
        let (_db, ator_store) = setup_test_db().await;

        let updated = ator_store
            .update(
                9999,
                &UpdateAtorRequest {
                    nome: Some("Ninguém".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!updated);
    }

    #[tokio::test]
    async fn test_update_missing_row_wins_over_malformed_date() {
        let (_db, ator_store) = setup_test_db().await;

        let result = ator_store
            .update(
                9999,
                &UpdateAtorRequest {
                    data_nascimento: Some("31/12/1990".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_date() {
        let (db, ator_store) = setup_test_db().await;

        let id = ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria Silva".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = ator_store
            .update(
                id,
                &UpdateAtorRequest {
                    nome: Some("Maria Souza".to_string()),
                    data_nascimento: Some("31/12/1990".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(InternalError::Parse { .. })));

        // The row is untouched
        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.nome.as_deref(), Some("Maria Silva"));
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_a_no_op_success() {
        let (db, ator_store) = setup_test_db().await;

        let id = ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria Silva".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let updated = ator_store
            .update(id, &UpdateAtorRequest::default())
            .await
            .unwrap();

        assert!(updated);

        let stored = Ator::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.nome.as_deref(), Some("Maria Silva"));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let (db, ator_store) = setup_test_db().await;

        let id = ator_store
            .create(&CreateAtorRequest {
                nome: Some("Maria Silva".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let deleted = ator_store.delete(id).await.unwrap();

        assert!(deleted);
        let remaining = Ator::find().all(&db).await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_false_for_unknown_id() {
        let (_db, ator_store) = setup_test_db().await;

        let deleted = ator_store.delete(4242).await.unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_distinct_municipios_dedupes_and_skips_blanks() {
        let (_db, ator_store) = setup_test_db().await;

        for municipio in ["Recife", "Recife", "Maceió"] {
            ator_store
                .create(&CreateAtorRequest {
                    cidade: Some(municipio.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        // One row with an empty municipality, one with none at all
        ator_store
            .create(&CreateAtorRequest {
                cidade: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        ator_store
            .create(&CreateAtorRequest {
                nome: Some("Sem cidade".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut municipios = ator_store.distinct_municipios().await.unwrap();
        municipios.sort();

        assert_eq!(municipios, vec!["Maceió".to_string(), "Recife".to_string()]);

        // Recomputed on every call, so a new row shows up immediately
        ator_store
            .create(&CreateAtorRequest {
                cidade: Some("Arapiraca".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let mut municipios = ator_store.distinct_municipios().await.unwrap();
        municipios.sort();
        assert_eq!(municipios.len(), 3);
    }
}
