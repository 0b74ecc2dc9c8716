use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::loans::models::Loan;
use crate::modules::loans::services::LoanCalculator;

/// Loan creation workflow
pub struct LoanService {
    gateway: Arc<dyn RepositoryGateway>,
}

impl LoanService {
    pub fn new(gateway: Arc<dyn RepositoryGateway>) -> Self {
        Self { gateway }
    }

    /// Lend a new loan to an existing customer
    ///
    /// # Arguments
    /// * `customer_id` - Owning customer
    /// * `principal` - Amount lent
    /// * `annual_rate_percent` - Simple annual interest rate in percent
    /// * `term_years` - Term in whole years
    ///
    /// # Returns
    /// * `Result<Loan>` - Stored loan with its computed terms
    ///
    /// # Errors
    /// * `InvalidInput` - terms rejected by the calculator; nothing is stored
    /// * `CustomerNotFound` - unknown customer
    pub async fn create_loan(
        &self,
        customer_id: &str,
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_years: u32,
    ) -> Result<Loan> {
        let terms = LoanCalculator::create_loan(principal, annual_rate_percent, term_years)
            .inspect_err(|e| {
                warn!(customer_id = customer_id, error = %e, "Loan request rejected");
            })?;

        if self.gateway.get_customer(customer_id).await?.is_none() {
            warn!(customer_id = customer_id, "Loan requested for unknown customer");
            return Err(AppError::customer_not_found(customer_id));
        }

        let loan = self.gateway.insert_loan(customer_id, &terms).await?;

        info!(
            loan_id = loan.id.as_str(),
            customer_id = customer_id,
            total_amount = %loan.terms.total_amount,
            installment = %loan.terms.installment,
            "Loan created"
        );

        Ok(loan)
    }

    /// Get a loan by ID
    pub async fn get_loan(&self, loan_id: &str) -> Result<Loan> {
        self.gateway
            .get_loan(loan_id)
            .await?
            .ok_or_else(|| AppError::loan_not_found(loan_id))
    }
}
