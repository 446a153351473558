//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{Loan, LoanPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every loan
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository
            .loans
            .list()
            .await
            .inspect_err(|e| e.log("Error fetching loan list"))
    }

    /// Record a loan. Student and book ids are not checked, and the
    /// book's available quantity is left as is.
    pub async fn create(&self, payload: LoanPayload) -> AppResult<i32> {
        let loan = Loan::from(payload);
        let id = self
            .repository
            .loans
            .create(&loan)
            .await
            .inspect_err(|e| e.log("Error registering loan"))?;
        tracing::info!(id_emprestimo = id, "Loan registered");
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository
            .loans
            .delete(id)
            .await
            .inspect_err(|e| e.log("Error removing loan"))?;
        tracing::info!(id_emprestimo = id, "Loan removed");
        Ok(())
    }

    pub async fn update(&self, id: i32, payload: LoanPayload) -> AppResult<()> {
        let mut loan = Loan::from(payload);
        loan.set_id(id);
        self.repository
            .loans
            .update(loan.id(), &loan)
            .await
            .inspect_err(|e| e.log("Error updating loan"))?;
        tracing::info!(id_emprestimo = id, "Loan updated");
        Ok(())
    }
}
