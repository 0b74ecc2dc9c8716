use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial terms of a loan, fixed at creation
///
/// Invariants:
/// - `total_amount == principal + interest`
/// - `interest == round2(principal * interest_rate / 100 * term_years)`
/// - `installment == round2(total_amount / (term_years * 12))`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Decimal,
    /// Annual interest rate as a percentage (10 means 10%)
    pub interest_rate: Decimal,
    pub term_years: u32,
    pub interest: Decimal,
    pub total_amount: Decimal,
    /// Equal monthly installment (EMI)
    pub installment: Decimal,
}

impl LoanTerms {
    /// Number of monthly installments for a term in years
    pub fn months_for(term_years: u32) -> u64 {
        u64::from(term_years) * 12
    }
}

/// Persisted loan record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub customer_id: String,
    #[serde(flatten)]
    pub terms: LoanTerms,
    pub created_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(customer_id: String, terms: LoanTerms) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            customer_id,
            terms,
            created_at: Utc::now(),
        }
    }
}

/// Financial state of a loan derived from its payment history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanStatus {
    /// Rounded sum of all payments
    pub amount_paid: Decimal,
    /// Outstanding amount; negative when overpaid
    pub balance: Decimal,
    /// Installments still due; zero once the balance is settled
    pub installments_left: u64,
}

impl LoanStatus {
    pub fn is_settled(&self) -> bool {
        self.balance <= Decimal::ZERO
    }
}
