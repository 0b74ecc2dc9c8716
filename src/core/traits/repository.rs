use async_trait::async_trait;

use crate::core::Result;
use crate::modules::customers::models::Customer;
use crate::modules::loans::models::{Loan, LoanTerms};
use crate::modules::payments::models::{NewPayment, Payment};

/// Storage boundary for customers, loans and payments
///
/// Constructed once per process and injected into request handlers.
/// Storage failures surface as `AppError::Storage`, unmodified.
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Find a customer by ID
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>>;

    /// Find a loan by ID
    async fn get_loan(&self, loan_id: &str) -> Result<Option<Loan>>;

    /// All payments of a loan, in insertion order
    async fn get_payments(&self, loan_id: &str) -> Result<Vec<Payment>>;

    /// All loans of a customer, in creation order
    async fn get_loans_for_customer(&self, customer_id: &str) -> Result<Vec<Loan>>;

    /// Persist a new loan for a customer
    async fn insert_loan(&self, customer_id: &str, terms: &LoanTerms) -> Result<Loan>;

    /// Append a payment to a loan's history
    ///
    /// Appends for the same loan are sequenced by the implementation.
    /// Returns `LoanNotFound` when the loan does not exist.
    async fn insert_payment(&self, loan_id: &str, payment: NewPayment) -> Result<Payment>;

    /// Connectivity check used by the readiness check
    async fn ping(&self) -> Result<()>;
}
