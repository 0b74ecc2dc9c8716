use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info};

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::overview::models::OverviewView;
use crate::modules::overview::services::OverviewBuilder;

/// Gathers a customer's loans and payment histories for the overview
pub struct OverviewService {
    gateway: Arc<dyn RepositoryGateway>,
}

impl OverviewService {
    pub fn new(gateway: Arc<dyn RepositoryGateway>) -> Self {
        Self { gateway }
    }

    /// Get the account overview of a customer
    ///
    /// Payment histories are fetched concurrently, one request per loan.
    /// Results are matched back to loans by position, so the output order is
    /// the loan listing order whatever order the fetches complete in.
    ///
    /// # Errors
    /// * `NoLoansFound` - customer has no loans
    /// * `Storage` - any fetch failed; the whole overview is abandoned
    pub async fn get_overview(&self, customer_id: &str) -> Result<OverviewView> {
        let loans = self.gateway.get_loans_for_customer(customer_id).await?;

        if loans.is_empty() {
            return Err(AppError::no_loans_found(customer_id));
        }

        debug!(
            customer_id = customer_id,
            loan_count = loans.len(),
            "Fetching payment histories"
        );

        let histories = try_join_all(
            loans
                .iter()
                .map(|loan| self.gateway.get_payments(&loan.id)),
        )
        .await?;

        let payments_by_loan: HashMap<String, _> = loans
            .iter()
            .map(|loan| loan.id.clone())
            .zip(histories)
            .collect();

        let overview = OverviewBuilder::build(customer_id, &loans, &payments_by_loan)?;

        info!(
            customer_id = customer_id,
            total_loans = overview.total_loans,
            errored = overview.loans.iter().filter(|l| l.is_errored()).count(),
            "Overview assembled"
        );

        Ok(overview)
    }
}
