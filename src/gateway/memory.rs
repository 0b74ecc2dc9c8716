use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::customers::models::Customer;
use crate::modules::loans::models::{Loan, LoanTerms};
use crate::modules::payments::models::{NewPayment, Payment};

#[derive(Default)]
struct Store {
    customers: HashMap<String, Customer>,
    /// Creation order
    loans: Vec<Loan>,
    /// Insertion order per loan
    payments: HashMap<String, Vec<Payment>>,
}

/// Process-local repository gateway
///
/// Backs tests and local runs without MySQL. Writes take the store's write
/// lock, which also sequences payment appends per loan.
#[derive(Default)]
pub struct InMemoryGateway {
    store: RwLock<Store>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a customer, builder style
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.store
            .get_mut()
            .customers
            .insert(customer.id.clone(), customer);
        self
    }

    /// Seed a customer on a shared gateway
    pub async fn add_customer(&self, customer: Customer) {
        self.store
            .write()
            .await
            .customers
            .insert(customer.id.clone(), customer);
    }
}

#[async_trait]
impl RepositoryGateway for InMemoryGateway {
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>> {
        Ok(self.store.read().await.customers.get(customer_id).cloned())
    }

    async fn get_loan(&self, loan_id: &str) -> Result<Option<Loan>> {
        let store = self.store.read().await;
        Ok(store.loans.iter().find(|l| l.id == loan_id).cloned())
    }

    async fn get_payments(&self, loan_id: &str) -> Result<Vec<Payment>> {
        let store = self.store.read().await;
        Ok(store.payments.get(loan_id).cloned().unwrap_or_default())
    }

    async fn get_loans_for_customer(&self, customer_id: &str) -> Result<Vec<Loan>> {
        let store = self.store.read().await;
        Ok(store
            .loans
            .iter()
            .filter(|l| l.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn insert_loan(&self, customer_id: &str, terms: &LoanTerms) -> Result<Loan> {
        let mut store = self.store.write().await;

        // mirrors the foreign key on loans.customer_id
        if !store.customers.contains_key(customer_id) {
            return Err(AppError::customer_not_found(customer_id));
        }

        let loan = Loan::new(customer_id.to_string(), terms.clone());
        store.loans.push(loan.clone());
        Ok(loan)
    }

    async fn insert_payment(&self, loan_id: &str, payment: NewPayment) -> Result<Payment> {
        let mut store = self.store.write().await;

        if !store.loans.iter().any(|l| l.id == loan_id) {
            return Err(AppError::loan_not_found(loan_id));
        }

        let payment = payment.into_payment(loan_id);
        store
            .payments
            .entry(loan_id.to_string())
            .or_default()
            .push(payment.clone());
        Ok(payment)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
