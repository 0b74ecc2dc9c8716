use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::modules::loans::models::{Loan, LoanStatus};
use crate::modules::payments::models::{Payment, PaymentType};

/// One payment as it appears on a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerTransaction {
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub payment_type: PaymentType,
}

impl From<&Payment> for LedgerTransaction {
    fn from(payment: &Payment) -> Self {
        Self {
            transaction_id: payment.id.clone(),
            date: payment.paid_at,
            amount: payment.amount,
            payment_type: payment.payment_type,
        }
    }
}

/// Read-only statement of a single loan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub loan: Loan,
    pub status: LoanStatus,
    /// Payment history in insertion order
    pub transactions: Vec<LedgerTransaction>,
}
