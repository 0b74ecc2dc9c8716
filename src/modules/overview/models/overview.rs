use rust_decimal::Decimal;

/// Per-loan line of a customer overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanSummary {
    pub loan_id: String,
    pub principal: Decimal,
    pub total_amount: Decimal,
    pub total_interest: Decimal,
    pub emi_amount: Decimal,
    pub amount_paid: Decimal,
    /// Absent when the loan's status could not be derived
    pub installments_left: Option<u64>,
    /// Derivation failure for this loan only
    pub error: Option<String>,
}

impl LoanSummary {
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate of all loans of one customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub customer_id: String,
    pub total_loans: usize,
    /// Same order as the customer's loan listing
    pub loans: Vec<LoanSummary>,
}
