use crate::core::Result;
use crate::modules::ledger::models::{LedgerTransaction, LedgerView};
use crate::modules::loans::models::Loan;
use crate::modules::loans::services::LoanCalculator;
use crate::modules::payments::models::Payment;

/// Assembles a per-loan statement from a resolved loan and its payments
pub struct LedgerBuilder;

impl LedgerBuilder {
    /// Build the ledger snapshot
    ///
    /// Transactions keep the order of `payments`; nothing is re-sorted.
    ///
    /// # Errors
    /// `DegenerateLoan` from status derivation
    pub fn build(loan: &Loan, payments: &[Payment]) -> Result<LedgerView> {
        let status = LoanCalculator::derive_loan_status(&loan.id, &loan.terms, payments)?;

        Ok(LedgerView {
            loan: loan.clone(),
            status,
            transactions: payments.iter().map(LedgerTransaction::from).collect(),
        })
    }
}
