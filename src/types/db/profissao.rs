use sea_orm::entity::prelude::*;

/// Profession lookup row, labelled by its `descricao` column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profissoes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub descricao: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
