use sea_orm::entity::prelude::*;

/// User group lookup row for segmenting registry records.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grupos_usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
