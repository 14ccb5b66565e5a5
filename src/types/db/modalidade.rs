use sea_orm::entity::prelude::*;

/// Teaching modality lookup row. The table is named `modalidades` but
/// the referencing column on `atores` is `modalidade_ensino_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modalidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub descricao: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
