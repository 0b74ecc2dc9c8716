// HTTP handlers for payment endpoints
//
// Endpoints:
// - POST /loans/{loan_id}/payments - Record a payment against a loan

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{RepositoryGateway, Result};
use crate::modules::payments::{
    models::{NewPayment, PaymentType},
    services::{PaymentResult, PaymentService},
};

/// Request for POST /loans/{loan_id}/payments
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub payment_type: PaymentType,
    /// Optional backdated timestamp (RFC 3339)
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Response for POST /loans/{loan_id}/payments
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub loan_id: String,
    pub payment_type: PaymentType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub message: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub remaining_balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_left: Option<u64>,
}

impl From<PaymentResult> for PaymentResponse {
    fn from(result: PaymentResult) -> Self {
        Self {
            payment_id: result.payment.id,
            loan_id: result.payment.loan_id,
            payment_type: result.payment.payment_type,
            amount: result.payment.amount,
            paid_at: result.payment.paid_at,
            message: "Payment recorded successfully.".to_string(),
            remaining_balance: result.remaining_balance,
            installments_left: result.installments_left,
        }
    }
}

/// POST /loans/{loan_id}/payments
///
/// # Request Body
/// ```json
/// {"amount": 6000, "payment_type": "INSTALLMENT"}
/// ```
///
/// # Returns
/// - 201: Payment stored; body carries the re-derived balance and installments left
/// - 400: Non-positive amount or unknown payment type
/// - 404: Loan not found
pub async fn record_payment(
    loan_id: web::Path<String>,
    request: web::Json<RecordPaymentRequest>,
    gateway: web::Data<dyn RepositoryGateway>,
) -> Result<HttpResponse> {
    let service = PaymentService::new(gateway.into_inner());
    let request = request.into_inner();

    let payment = NewPayment::new(request.payment_type, request.amount, request.paid_at)?;
    let result = service.record_payment(&loan_id, payment).await?;

    Ok(HttpResponse::Created().json(PaymentResponse::from(result)))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/loans/{loan_id}/payments", web::post().to(record_payment));
}
