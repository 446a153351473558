//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository
            .books
            .list()
            .await
            .inspect_err(|e| e.log("Error fetching book list"))
    }

    /// Register a new book, returning its identifier
    pub async fn create(&self, payload: BookPayload) -> AppResult<i32> {
        let book = Book::from(payload);
        let id = self
            .repository
            .books
            .create(&book)
            .await
            .inspect_err(|e| e.log("Error registering book"))?;
        tracing::info!(id_livro = id, "Book registered");
        Ok(id)
    }

    /// Remove a book by identifier
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository
            .books
            .delete(id)
            .await
            .inspect_err(|e| e.log("Error removing book"))?;
        tracing::info!(id_livro = id, "Book removed");
        Ok(())
    }

    /// Overwrite every field of an existing book
    pub async fn update(&self, id: i32, payload: BookPayload) -> AppResult<()> {
        let mut book = Book::from(payload);
        book.set_id(id);
        self.repository
            .books
            .update(book.id(), &book)
            .await
            .inspect_err(|e| e.log("Error updating book"))?;
        tracing::info!(id_livro = id, "Book updated");
        Ok(())
    }
}
