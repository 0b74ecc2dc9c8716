use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, info};

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::customers::{models::Customer, repositories::CustomerRepository};
use crate::modules::loans::{
    models::{Loan, LoanTerms},
    repositories::LoanRepository,
};
use crate::modules::payments::{
    models::{NewPayment, Payment},
    repositories::PaymentRepository,
};

/// MySQL-backed repository gateway
pub struct MySqlGateway {
    pool: MySqlPool,
    customers: CustomerRepository,
    loans: LoanRepository,
    payments: PaymentRepository,
}

impl MySqlGateway {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            loans: LoanRepository::new(pool.clone()),
            payments: PaymentRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl RepositoryGateway for MySqlGateway {
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>> {
        self.customers.find_by_id(customer_id).await
    }

    async fn get_loan(&self, loan_id: &str) -> Result<Option<Loan>> {
        self.loans.find_by_id(loan_id).await
    }

    async fn get_payments(&self, loan_id: &str) -> Result<Vec<Payment>> {
        let payments = self.payments.find_by_loan(loan_id).await?;
        debug!(loan_id = loan_id, count = payments.len(), "Fetched payments");
        Ok(payments)
    }

    async fn get_loans_for_customer(&self, customer_id: &str) -> Result<Vec<Loan>> {
        self.loans.find_by_customer(customer_id).await
    }

    async fn insert_loan(&self, customer_id: &str, terms: &LoanTerms) -> Result<Loan> {
        let loan = Loan::new(customer_id.to_string(), terms.clone());
        self.loans.create(&loan).await?;

        info!(loan_id = loan.id.as_str(), customer_id = customer_id, "Loan stored");
        Ok(loan)
    }

    /// Appends under a row lock on the loan so concurrent payments for the
    /// same loan are applied one after another.
    async fn insert_payment(&self, loan_id: &str, payment: NewPayment) -> Result<Payment> {
        let mut tx = self.pool.begin().await?;

        if !LoanRepository::lock_for_update(&mut tx, loan_id).await? {
            return Err(AppError::loan_not_found(loan_id));
        }

        let payment = payment.into_payment(loan_id);
        self.payments.create_with_tx(&payment, &mut *tx).await?;

        tx.commit().await?;

        info!(
            loan_id = loan_id,
            payment_id = payment.id.as_str(),
            amount = %payment.amount,
            "Payment stored"
        );
        Ok(payment)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
