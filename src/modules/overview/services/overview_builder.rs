use std::collections::HashMap;

use tracing::warn;

use crate::core::{AppError, Result};
use crate::modules::loans::models::Loan;
use crate::modules::loans::services::LoanCalculator;
use crate::modules::overview::models::{LoanSummary, OverviewView};
use crate::modules::payments::models::Payment;

/// Folds per-loan summaries of one customer into an overview
pub struct OverviewBuilder;

impl OverviewBuilder {
    /// Build the overview
    ///
    /// Each loan is derived independently. A loan whose status cannot be
    /// derived (e.g. a degenerate installment) is returned with `error` set
    /// and no `installments_left`; the other loans are unaffected.
    ///
    /// # Arguments
    /// * `customer_id` - Customer the loans belong to
    /// * `loans` - Loans in listing order; output keeps this order
    /// * `payments_by_loan` - Payments keyed by loan ID; a missing key means no payments
    ///
    /// # Errors
    /// `NoLoansFound` when `loans` is empty
    pub fn build(
        customer_id: &str,
        loans: &[Loan],
        payments_by_loan: &HashMap<String, Vec<Payment>>,
    ) -> Result<OverviewView> {
        if loans.is_empty() {
            return Err(AppError::no_loans_found(customer_id));
        }

        let summaries = loans
            .iter()
            .map(|loan| {
                let payments = payments_by_loan
                    .get(&loan.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                Self::summarize(loan, payments)
            })
            .collect::<Vec<_>>();

        Ok(OverviewView {
            customer_id: customer_id.to_string(),
            total_loans: loans.len(),
            loans: summaries,
        })
    }

    fn summarize(loan: &Loan, payments: &[Payment]) -> LoanSummary {
        let (amount_paid, installments_left, error) =
            match LoanCalculator::derive_loan_status(&loan.id, &loan.terms, payments) {
                Ok(status) => (status.amount_paid, Some(status.installments_left), None),
                Err(e) => {
                    warn!(loan_id = loan.id.as_str(), error = %e, "Loan excluded from overview totals");
                    // the entry is flagged, so an unsummable history reports zero
                    let amount_paid = LoanCalculator::amount_paid(payments).unwrap_or_default();
                    (amount_paid, None, Some(e.to_string()))
                }
            };

        LoanSummary {
            loan_id: loan.id.clone(),
            principal: loan.terms.principal,
            total_amount: loan.terms.total_amount,
            total_interest: loan.terms.interest,
            emi_amount: loan.terms.installment,
            amount_paid,
            installments_left,
            error,
        }
    }
}
