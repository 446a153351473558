//! Data models for Biblioteca

pub mod book;
pub mod dates;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookPayload};
pub use loan::{Loan, LoanPayload};
pub use student::{Student, StudentPayload};
