//! Student (aluno) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::dates::deserialize_optional_date;

/// Student record from the `aluno` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id_aluno: i32,
    /// Registration number (RA)
    pub ra: Option<String>,
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub celular: Option<String>,
}

/// Create / update student request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StudentPayload {
    pub ra: Option<String>,
    pub nome: Option<String>,
    pub sobrenome: Option<String>,
    /// Birth date (YYYY-MM-DD)
    #[serde(
        default,
        alias = "dataNascimento",
        deserialize_with = "deserialize_optional_date"
    )]
    pub data_nascimento: Option<NaiveDate>,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub celular: Option<String>,
}

impl Student {
    pub fn id(&self) -> i32 {
        self.id_aluno
    }

    pub fn set_id(&mut self, id: i32) {
        self.id_aluno = id;
    }
}

impl From<StudentPayload> for Student {
    fn from(payload: StudentPayload) -> Self {
        Self {
            id_aluno: 0,
            ra: payload.ra,
            nome: payload.nome,
            sobrenome: payload.sobrenome,
            data_nascimento: payload.data_nascimento,
            endereco: payload.endereco,
            email: payload.email,
            celular: payload.celular,
        }
    }
}
