// HTTP handlers for loan endpoints
//
// Endpoints:
// - POST /loans - Lend a new loan to a customer
// - GET /loans/{loan_id} - Get the stored terms of a loan

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, RepositoryGateway, Result};
use crate::modules::loans::{models::Loan, services::LoanService};

/// Customer reference as sent by clients: a string or a non-negative integer
fn customer_id_from(value: &serde_json::Value) -> Result<String> {
    let id = match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) if n.is_u64() => n.to_string(),
        other => {
            return Err(AppError::invalid_input(format!(
                "customer_id must be a string or a non-negative integer, got {}",
                other
            )))
        }
    };

    if id.is_empty() {
        return Err(AppError::invalid_input("customer_id must not be empty"));
    }

    Ok(id)
}

/// Request for POST /loans
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    pub customer_id: serde_json::Value,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub principal: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub interest_rate: Decimal,
    #[serde(alias = "term_years")]
    pub period_years: u32,
}

/// Response for a stored loan
#[derive(Debug, Serialize)]
pub struct LoanResponse {
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
    pub total_amount_payable: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub monthly_emi: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            loan_id: loan.id,
            customer_id: loan.customer_id,
            principal: loan.terms.principal,
            interest_rate: loan.terms.interest_rate,
            period_years: loan.terms.term_years,
            total_interest: loan.terms.interest,
            total_amount_payable: loan.terms.total_amount,
            monthly_emi: loan.terms.installment,
            created_at: loan.created_at,
        }
    }
}

/// POST /loans
///
/// # Request Body
/// ```json
/// {"customer_id": "C-1001", "principal": 120000, "interest_rate": 10, "period_years": 2}
/// ```
///
/// # Returns
/// - 201: Loan created with computed interest, total and EMI
/// - 400: Non-positive principal or term, negative rate
/// - 404: Customer not found
pub async fn create_loan(
    request: web::Json<CreateLoanRequest>,
    gateway: web::Data<dyn RepositoryGateway>,
) -> Result<HttpResponse> {
    let service = LoanService::new(gateway.into_inner());
    let request = request.into_inner();
    let customer_id = customer_id_from(&request.customer_id)?;

    let loan = service
        .create_loan(
            &customer_id,
            request.principal,
            request.interest_rate,
            request.period_years,
        )
        .await?;

    Ok(HttpResponse::Created().json(LoanResponse::from(loan)))
}

/// GET /loans/{loan_id}
pub async fn get_loan(
    loan_id: web::Path<String>,
    gateway: web::Data<dyn RepositoryGateway>,
) -> Result<HttpResponse> {
    let service = LoanService::new(gateway.into_inner());
    let loan = service.get_loan(&loan_id).await?;

    Ok(HttpResponse::Ok().json(LoanResponse::from(loan)))
}

/// Configure loan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/loans", web::post().to(create_loan))
        .route("/loans/{loan_id}", web::get().to(get_loan));
}
