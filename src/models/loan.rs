//! Loan (emprestimo) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::dates::deserialize_optional_date;

/// Loan record from the `emprestimo` table.
///
/// Student and book references are stored as-is; nothing checks that they exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id_emprestimo: i32,
    pub id_aluno: Option<i32>,
    pub id_livro: Option<i32>,
    pub data_emprestimo: Option<NaiveDate>,
    /// Due / return date
    pub data_devolucao: Option<NaiveDate>,
    pub status_emprestimo: Option<String>,
}

/// Create / update loan request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoanPayload {
    #[serde(alias = "idAluno")]
    pub id_aluno: Option<i32>,
    #[serde(alias = "idLivro")]
    pub id_livro: Option<i32>,
    #[serde(
        default,
        alias = "dataEmprestimo",
        deserialize_with = "deserialize_optional_date"
    )]
    pub data_emprestimo: Option<NaiveDate>,
    #[serde(
        default,
        alias = "dataDevolucao",
        alias = "dataDevolução",
        deserialize_with = "deserialize_optional_date"
    )]
    pub data_devolucao: Option<NaiveDate>,
    #[serde(alias = "statusEmprestimo")]
    pub status_emprestimo: Option<String>,
}

impl Loan {
    pub fn id(&self) -> i32 {
        self.id_emprestimo
    }

    pub fn set_id(&mut self, id: i32) {
        self.id_emprestimo = id;
    }
}

impl From<LoanPayload> for Loan {
    fn from(payload: LoanPayload) -> Self {
        Self {
            id_emprestimo: 0,
            id_aluno: payload.id_aluno,
            id_livro: payload.id_livro,
            data_emprestimo: payload.data_emprestimo,
            data_devolucao: payload.data_devolucao,
            status_emprestimo: payload.status_emprestimo,
        }
    }
}
