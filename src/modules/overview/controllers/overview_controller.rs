use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{RepositoryGateway, Result};
use crate::modules::overview::{
    models::{LoanSummary, OverviewView},
    services::OverviewService,
};

/// Per-loan entry of the overview response
#[derive(Debug, Serialize)]
pub struct LoanSummaryResponse {
    pub loan_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub principal: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_interest: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub emi_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount_paid: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_left: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<LoanSummary> for LoanSummaryResponse {
    fn from(summary: LoanSummary) -> Self {
        Self {
            loan_id: summary.loan_id,
            principal: summary.principal,
            total_amount: summary.total_amount,
            total_interest: summary.total_interest,
            emi_amount: summary.emi_amount,
            amount_paid: summary.amount_paid,
            installments_left: summary.installments_left,
            error: summary.error,
        }
    }
}

/// Response for GET /customers/{customer_id}/overview
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub customer_id: String,
    pub total_loans: usize,
    pub loans: Vec<LoanSummaryResponse>,
}

impl From<OverviewView> for OverviewResponse {
    fn from(overview: OverviewView) -> Self {
        Self {
            customer_id: overview.customer_id,
            total_loans: overview.total_loans,
            loans: overview
                .loans
                .into_iter()
                .map(LoanSummaryResponse::from)
                .collect(),
        }
    }
}

/// GET /customers/{customer_id}/overview
///
/// # Returns
/// - 200: One summary per loan, in the customer's loan order
/// - 404: Customer has no loans
pub async fn get_overview(
    customer_id: web::Path<String>,
    gateway: web::Data<dyn RepositoryGateway>,
) -> Result<HttpResponse> {
    let service = OverviewService::new(gateway.into_inner());
    let overview = service.get_overview(&customer_id).await?;

    Ok(HttpResponse::Ok().json(OverviewResponse::from(overview)))
}

/// Configure overview routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/customers/{customer_id}/overview",
        web::get().to(get_overview),
    );
}
