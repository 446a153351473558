//! Loans repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::Loan,
};

/// Data access for the `emprestimo` table.
///
/// Each call is a single autocommit statement: creating or removing a loan
/// leaves the book's available quantity untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Loan>>;
    async fn create(&self, loan: &Loan) -> AppResult<i32>;
    async fn delete(&self, id: i32) -> AppResult<()>;
    async fn update(&self, id: i32, loan: &Loan) -> AppResult<()>;
}

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for LoansRepository {
    async fn list(&self) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, Loan>("SELECT * FROM emprestimo")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, loan: &Loan) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO emprestimo (id_aluno, id_livro, data_emprestimo, data_devolucao, status_emprestimo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_emprestimo
            "#,
        )
        .bind(loan.id_aluno)
        .bind(loan.id_livro)
        .bind(loan.data_emprestimo)
        .bind(loan.data_devolucao)
        .bind(&loan.status_emprestimo)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM emprestimo WHERE id_emprestimo = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan with id {} not found", id)));
        }
        Ok(())
    }

    async fn update(&self, id: i32, loan: &Loan) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE emprestimo SET
                id_aluno = $1,
                id_livro = $2,
                data_emprestimo = $3,
                data_devolucao = $4,
                status_emprestimo = $5
            WHERE id_emprestimo = $6
            "#,
        )
        .bind(loan.id_aluno)
        .bind(loan.id_livro)
        .bind(loan.data_emprestimo)
        .bind(loan.data_devolucao)
        .bind(&loan.status_emprestimo)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan with id {} not found", id)));
        }
        Ok(())
    }
}
