use std::sync::Arc;

use tracing::debug;

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::ledger::models::LedgerView;
use crate::modules::ledger::services::LedgerBuilder;

/// Resolves a loan and its history, then builds the statement
pub struct LedgerService {
    gateway: Arc<dyn RepositoryGateway>,
}

impl LedgerService {
    pub fn new(gateway: Arc<dyn RepositoryGateway>) -> Self {
        Self { gateway }
    }

    /// Get the ledger of a loan
    ///
    /// # Errors
    /// * `LoanNotFound` - unknown loan ID
    /// * `DegenerateLoan` - loan with a zero installment
    /// * `Storage` - gateway failure
    pub async fn get_ledger(&self, loan_id: &str) -> Result<LedgerView> {
        let loan = self
            .gateway
            .get_loan(loan_id)
            .await?
            .ok_or_else(|| AppError::loan_not_found(loan_id))?;

        let payments = self.gateway.get_payments(loan_id).await?;

        debug!(
            loan_id = loan_id,
            payment_count = payments.len(),
            "Building ledger"
        );

        LedgerBuilder::build(&loan, &payments)
    }
}
