use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{money, AppError, RepositoryGateway, Result};
use crate::modules::loans::services::LoanCalculator;
use crate::modules::payments::models::{NewPayment, Payment};

/// Outcome of recording a payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResult {
    pub payment: Payment,
    pub remaining_balance: Decimal,
    /// Absent when the loan's installment is degenerate
    pub installments_left: Option<u64>,
}

/// Payment recording workflow
///
/// The only operation with a durable side effect: the append goes through
/// the gateway, then the loan's status is re-derived from the full history.
pub struct PaymentService {
    gateway: Arc<dyn RepositoryGateway>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn RepositoryGateway>) -> Self {
        Self { gateway }
    }

    /// Record a payment against a loan
    ///
    /// # Errors
    /// * `LoanNotFound` - unknown loan; nothing is stored
    /// * `Storage` - gateway failure
    pub async fn record_payment(&self, loan_id: &str, payment: NewPayment) -> Result<PaymentResult> {
        let loan = self
            .gateway
            .get_loan(loan_id)
            .await?
            .ok_or_else(|| AppError::loan_not_found(loan_id))?;

        let payment = self.gateway.insert_payment(loan_id, payment).await?;
        let history = self.gateway.get_payments(loan_id).await?;

        let (remaining_balance, installments_left) =
            match LoanCalculator::derive_loan_status(&loan.id, &loan.terms, &history) {
                Ok(status) => (status.balance, Some(status.installments_left)),
                Err(AppError::DegenerateLoan(_)) => {
                    warn!(loan_id = loan_id, "Payment recorded on a loan with zero installment");
                    let paid = LoanCalculator::amount_paid(&history)?;
                    let balance = loan
                        .terms
                        .total_amount
                        .checked_sub(paid)
                        .map(money::round2)
                        .ok_or_else(|| {
                            AppError::internal(format!("Balance overflow for loan {}", loan_id))
                        })?;
                    (balance, None)
                }
                Err(e) => return Err(e),
            };

        info!(
            loan_id = loan_id,
            payment_id = payment.id.as_str(),
            payment_type = %payment.payment_type,
            amount = %payment.amount,
            remaining_balance = %remaining_balance,
            "Payment recorded"
        );

        Ok(PaymentResult {
            payment,
            remaining_balance,
            installments_left,
        })
    }
}
