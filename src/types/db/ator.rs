use sea_orm::entity::prelude::*;

/// Registry record for a person under care or intervention.
///
/// Every descriptive column is nullable: rows are built up over time by
/// partial updates and the intake form leaves most fields blank. The
/// `modalidade_ensino_id` column keeps its historical name even though
/// the Rust-side field is the shorter `modalidade_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "atores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub sessao_visual: Option<String>,
    pub idade_visual: Option<String>,
    pub municipio: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub pais: Option<String>,
    pub status: Option<String>,
    pub data_nascimento: Option<Date>,
    pub data_inicio_intervencao: Option<Date>,
    pub username: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub parecer: Option<String>,
    pub unidade_id: Option<i32>,
    pub profissao_id: Option<i32>,
    #[sea_orm(column_name = "modalidade_ensino_id")]
    pub modalidade_id: Option<i32>,
    pub grupo_usuario_id: Option<i32>,
    // Free-form reference, no lookup table backs it.
    pub idioma_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::unidade::Entity",
        from = "Column::UnidadeId",
        to = "super::unidade::Column::Id"
    )]
    Unidade,
    #[sea_orm(
        belongs_to = "super::profissao::Entity",
        from = "Column::ProfissaoId",
        to = "super::profissao::Column::Id"
    )]
    Profissao,
    #[sea_orm(
        belongs_to = "super::modalidade::Entity",
        from = "Column::ModalidadeId",
        to = "super::modalidade::Column::Id"
    )]
    Modalidade,
    #[sea_orm(
        belongs_to = "super::grupo_usuario::Entity",
        from = "Column::GrupoUsuarioId",
        to = "super::grupo_usuario::Column::Id"
    )]
    GrupoUsuario,
}

impl Related<super::unidade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unidade.def()
    }
}

impl Related<super::profissao::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profissao.def()
    }
}

impl Related<super::modalidade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modalidade.def()
    }
}

impl Related<super::grupo_usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrupoUsuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
