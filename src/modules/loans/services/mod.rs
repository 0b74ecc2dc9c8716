pub mod loan_calculator;
pub mod loan_service;

pub use loan_calculator::LoanCalculator;
pub use loan_service::LoanService;
