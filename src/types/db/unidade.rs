use sea_orm::entity::prelude::*;

/// Care unit (institution) a registry record can be attached to.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
