use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table (administrative login accounts)
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Create the four lookup tables that feed selection widgets
        manager
            .create_table(
                Table::create()
                    .table(Unidades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Unidades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Unidades::Nome).string_len(150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profissoes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profissoes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profissoes::Descricao).string_len(150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Modalidades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modalidades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modalidades::Descricao).string_len(150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GruposUsuario::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GruposUsuario::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GruposUsuario::Nome).string_len(150))
                    .to_owned(),
            )
            .await?;

        // Create atores table (the registry itself)
        manager
            .create_table(
                Table::create()
                    .table(Atores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Atores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Atores::Nome).string_len(150))
                    .col(ColumnDef::new(Atores::Email).string_len(150))
                    .col(ColumnDef::new(Atores::SessaoVisual).string_len(50))
                    .col(ColumnDef::new(Atores::IdadeVisual).string_len(50))
                    .col(ColumnDef::new(Atores::Municipio).string_len(100))
                    .col(ColumnDef::new(Atores::Endereco).string_len(255))
                    .col(ColumnDef::new(Atores::Cidade).string_len(100))
                    .col(ColumnDef::new(Atores::Estado).string_len(50))
                    .col(ColumnDef::new(Atores::Pais).string_len(50))
                    .col(ColumnDef::new(Atores::Status).string_len(20))
                    .col(ColumnDef::new(Atores::DataNascimento).date())
                    .col(ColumnDef::new(Atores::DataInicioIntervencao).date())
                    .col(ColumnDef::new(Atores::Username).string_len(100))
                    .col(ColumnDef::new(Atores::Parecer).text())
                    .col(ColumnDef::new(Atores::UnidadeId).integer())
                    .col(ColumnDef::new(Atores::ProfissaoId).integer())
                    .col(ColumnDef::new(Atores::ModalidadeEnsinoId).integer())
                    .col(ColumnDef::new(Atores::GrupoUsuarioId).integer())
                    .col(ColumnDef::new(Atores::IdiomaId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_atores_unidade_id")
                            .from(Atores::Table, Atores::UnidadeId)
                            .to(Unidades::Table, Unidades::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_atores_profissao_id")
                            .from(Atores::Table, Atores::ProfissaoId)
                            .to(Profissoes::Table, Profissoes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_atores_modalidade_ensino_id")
                            .from(Atores::Table, Atores::ModalidadeEnsinoId)
                            .to(Modalidades::Table, Modalidades::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_atores_grupo_usuario_id")
                            .from(Atores::Table, Atores::GrupoUsuarioId)
                            .to(GruposUsuario::Table, GruposUsuario::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Indexes on the lookup references used by list serialization
        manager
            .create_index(
                Index::create()
                    .name("idx_atores_unidade_id")
                    .table(Atores::Table)
                    .col(Atores::UnidadeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_atores_profissao_id")
                    .table(Atores::Table)
                    .col(Atores::ProfissaoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_atores_modalidade_ensino_id")
                    .table(Atores::Table)
                    .col(Atores::ModalidadeEnsinoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_atores_grupo_usuario_id")
                    .table(Atores::Table)
                    .col(Atores::GrupoUsuarioId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Atores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Unidades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profissoes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modalidades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GruposUsuario::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    IsAdmin,
}

#[derive(DeriveIden)]
enum Unidades {
    Table,
    Id,
    Nome,
}

#[derive(DeriveIden)]
enum Profissoes {
    Table,
    Id,
    Descricao,
}

#[derive(DeriveIden)]
enum Modalidades {
    Table,
    Id,
    Descricao,
}

#[derive(DeriveIden)]
enum GruposUsuario {
    Table,
    Id,
    Nome,
}

#[derive(DeriveIden)]
enum Atores {
    Table,
    Id,
    Nome,
    Email,
    SessaoVisual,
    IdadeVisual,
    Municipio,
    Endereco,
    Cidade,
    Estado,
    Pais,
    Status,
    DataNascimento,
    DataInicioIntervencao,
    Username,
    Parecer,
    UnidadeId,
    ProfissaoId,
    ModalidadeEnsinoId,
    GrupoUsuarioId,
    IdiomaId,
}
