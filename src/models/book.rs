//! Book (livro) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record from the `livro` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Server-assigned identifier (0 until persisted)
    pub id_livro: i32,
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub editora: Option<String>,
    /// Publication year, kept as free text
    pub ano_publicacao: Option<String>,
    pub isbn: Option<String>,
    /// Copies owned by the library
    pub quant_total: Option<i32>,
    /// Copies currently on the shelf
    pub quant_disponivel: Option<i32>,
    pub valor_aquisicao: Option<Decimal>,
    /// Free-text loan flag (e.g. "sim" / "não")
    pub status_livro_emprestado: Option<String>,
}

/// Create / update book request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub editora: Option<String>,
    #[serde(alias = "anoPublicacao")]
    pub ano_publicacao: Option<String>,
    pub isbn: Option<String>,
    #[serde(alias = "quantTotal")]
    pub quant_total: Option<i32>,
    #[serde(alias = "quantDisponivel")]
    pub quant_disponivel: Option<i32>,
    #[serde(alias = "valorAquisicao")]
    pub valor_aquisicao: Option<Decimal>,
    #[serde(alias = "statusLivroEmprestado")]
    pub status_livro_emprestado: Option<String>,
}

impl Book {
    pub fn id(&self) -> i32 {
        self.id_livro
    }

    pub fn set_id(&mut self, id: i32) {
        self.id_livro = id;
    }
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Self {
            id_livro: 0,
            titulo: payload.titulo,
            autor: payload.autor,
            editora: payload.editora,
            ano_publicacao: payload.ano_publicacao,
            isbn: payload.isbn,
            quant_total: payload.quant_total,
            quant_disponivel: payload.quant_disponivel,
            valor_aquisicao: payload.valor_aquisicao,
            status_livro_emprestado: payload.status_livro_emprestado,
        }
    }
}
