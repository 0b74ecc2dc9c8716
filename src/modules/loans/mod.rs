// Loans module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Loan, LoanStatus, LoanTerms};
pub use repositories::LoanRepository;
pub use services::{LoanCalculator, LoanService};
