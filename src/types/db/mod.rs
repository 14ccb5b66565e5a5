// Database entities - SeaORM models
pub mod ator;
pub mod grupo_usuario;
pub mod modalidade;
pub mod profissao;
pub mod unidade;
pub mod user;
