use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{RepositoryGateway, Result};
use crate::modules::ledger::{
    models::{LedgerTransaction, LedgerView},
    services::LedgerService,
};
use crate::modules::payments::models::PaymentType;

/// Ledger line
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: String,
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

impl From<LedgerTransaction> for TransactionResponse {
    fn from(transaction: LedgerTransaction) -> Self {
        Self {
            transaction_id: transaction.transaction_id,
            date: transaction.date,
            amount: transaction.amount,
            payment_type: transaction.payment_type,
        }
    }
}

/// Response for GET /loans/{loan_id}/ledger
#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub loan_id: String,
    pub customer_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub principal: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub interest_rate: Decimal,
    pub period_years: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_interest: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_emi: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount_paid: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance_amount: Decimal,
    pub installments_left: u64,
    pub transactions: Vec<TransactionResponse>,
}

impl From<LedgerView> for LedgerResponse {
    fn from(ledger: LedgerView) -> Self {
        let LedgerView {
            loan,
            status,
            transactions,
        } = ledger;

        Self {
            loan_id: loan.id,
            customer_id: loan.customer_id,
            principal: loan.terms.principal,
            interest_rate: loan.terms.interest_rate,
            period_years: loan.terms.term_years,
            total_interest: loan.terms.interest,
            total_amount: loan.terms.total_amount,
            monthly_emi: loan.terms.installment,
            amount_paid: status.amount_paid,
            balance_amount: status.balance,
            installments_left: status.installments_left,
            transactions: transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
        }
    }
}

/// GET /loans/{loan_id}/ledger
///
/// # Returns
/// - 200: Loan terms, derived totals and the payment history in insertion order
/// - 404: Loan not found
/// - 422: Loan has a zero installment
pub async fn get_ledger(
    loan_id: web::Path<String>,
    gateway: web::Data<dyn RepositoryGateway>,
) -> Result<HttpResponse> {
    let service = LedgerService::new(gateway.into_inner());
    let ledger = service.get_ledger(&loan_id).await?;

    Ok(HttpResponse::Ok().json(LedgerResponse::from(ledger)))
}

/// Configure ledger routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/loans/{loan_id}/ledger", web::get().to(get_ledger));
}
