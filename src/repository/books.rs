//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Data access for the `livro` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, in storage scan order
    async fn list(&self) -> AppResult<Vec<Book>>;
    /// Insert a book and return its generated identifier
    async fn create(&self, book: &Book) -> AppResult<i32>;
    /// Delete a book; `NotFound` when no row matched
    async fn delete(&self, id: i32) -> AppResult<()>;
    /// Overwrite every mutable column; `NotFound` when no row matched
    async fn update(&self, id: i32, book: &Book) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for BooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM livro")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, book: &Book) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO livro (titulo, autor, editora, ano_publicacao, isbn,
                               quant_total, quant_disponivel, valor_aquisicao,
                               status_livro_emprestado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id_livro
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(&book.editora)
        .bind(&book.ano_publicacao)
        .bind(&book.isbn)
        .bind(book.quant_total)
        .bind(book.quant_disponivel)
        .bind(book.valor_aquisicao)
        .bind(&book.status_livro_emprestado)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM livro WHERE id_livro = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    async fn update(&self, id: i32, book: &Book) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE livro SET
                titulo = $1,
                autor = $2,
                editora = $3,
                ano_publicacao = $4,
                isbn = $5,
                quant_total = $6,
                quant_disponivel = $7,
                valor_aquisicao = $8,
                status_livro_emprestado = $9
            WHERE id_livro = $10
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(&book.editora)
        .bind(&book.ano_publicacao)
        .bind(&book.isbn)
        .bind(book.quant_total)
        .bind(book.quant_disponivel)
        .bind(book.valor_aquisicao)
        .bind(&book.status_livro_emprestado)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }
}
