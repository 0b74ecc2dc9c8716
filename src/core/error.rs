use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Business-rule precondition failed on a computation or request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Loan reference could not be resolved
    #[error("Loan not found: {0}")]
    LoanNotFound(String),

    /// Customer reference could not be resolved
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Customer has no loans to summarize
    #[error("No loans found for customer: {0}")]
    NoLoansFound(String),

    /// Loan whose installment amount is zero, so no schedule can be derived
    #[error("Degenerate loan {0}: installment amount is zero")]
    DegenerateLoan(String),

    /// Storage failures, passed through unmodified
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::LoanNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoLoansFound(_) => StatusCode::NOT_FOUND,
            AppError::DegenerateLoan(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn loan_not_found(loan_id: impl Into<String>) -> Self {
        AppError::LoanNotFound(loan_id.into())
    }

    pub fn customer_not_found(customer_id: impl Into<String>) -> Self {
        AppError::CustomerNotFound(customer_id.into())
    }

    pub fn no_loans_found(customer_id: impl Into<String>) -> Self {
        AppError::NoLoansFound(customer_id.into())
    }

    pub fn degenerate_loan(loan_id: impl Into<String>) -> Self {
        AppError::DegenerateLoan(loan_id.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
