//! Students repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::student::Student,
};

/// Data access for the `aluno` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Student>>;
    async fn create(&self, student: &Student) -> AppResult<i32>;
    async fn delete(&self, id: i32) -> AppResult<()>;
    async fn update(&self, id: i32, student: &Student) -> AppResult<()>;
}

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for StudentsRepository {
    async fn list(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>("SELECT * FROM aluno")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, student: &Student) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO aluno (ra, nome, sobrenome, data_nascimento, endereco, email, celular)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id_aluno
            "#,
        )
        .bind(&student.ra)
        .bind(&student.nome)
        .bind(&student.sobrenome)
        .bind(student.data_nascimento)
        .bind(&student.endereco)
        .bind(&student.email)
        .bind(&student.celular)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM aluno WHERE id_aluno = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student with id {} not found", id)));
        }
        Ok(())
    }

    async fn update(&self, id: i32, student: &Student) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE aluno SET
                ra = $1,
                nome = $2,
                sobrenome = $3,
                data_nascimento = $4,
                endereco = $5,
                email = $6,
                celular = $7
            WHERE id_aluno = $8
            "#,
        )
        .bind(&student.ra)
        .bind(&student.nome)
        .bind(&student.sobrenome)
        .bind(student.data_nascimento)
        .bind(&student.endereco)
        .bind(&student.email)
        .bind(&student.celular)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student with id {} not found", id)));
        }
        Ok(())
    }
}
