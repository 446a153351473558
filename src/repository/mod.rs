//! Repository layer for database operations

pub mod books;
pub mod loans;
pub mod students;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

pub use books::{BookRepository, BooksRepository};
pub use loans::{LoanRepository, LoansRepository};
pub use students::{StudentRepository, StudentsRepository};

#[cfg(test)]
pub use books::MockBookRepository;
#[cfg(test)]
pub use loans::MockLoanRepository;
#[cfg(test)]
pub use students::MockStudentRepository;

/// Database reachability check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquire one connection from the pool and release it immediately.
    /// Returns false on any failure.
    async fn connect(&self) -> bool;
}

#[async_trait]
impl ConnectionProvider for Pool<Postgres> {
    async fn connect(&self) -> bool {
        match self.acquire().await {
            Ok(conn) => {
                drop(conn);
                true
            }
            Err(e) => {
                tracing::error!(error = ?e, "Database connection check failed");
                false
            }
        }
    }
}

/// Main repository struct holding the data-access handles for every entity
#[derive(Clone)]
pub struct Repository {
    pub connection: Arc<dyn ConnectionProvider>,
    pub books: Arc<dyn BookRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub loans: Arc<dyn LoanRepository>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(BooksRepository::new(pool.clone())),
            students: Arc::new(StudentsRepository::new(pool.clone())),
            loans: Arc::new(LoansRepository::new(pool.clone())),
            connection: Arc::new(pool),
        }
    }

    /// Assemble a repository from arbitrary implementations
    pub fn from_parts(
        connection: Arc<dyn ConnectionProvider>,
        books: Arc<dyn BookRepository>,
        students: Arc<dyn StudentRepository>,
        loans: Arc<dyn LoanRepository>,
    ) -> Self {
        Self {
            connection,
            books,
            students,
            loans,
        }
    }

    /// Check that the database is reachable
    pub async fn connect(&self) -> bool {
        self.connection.connect().await
    }
}
