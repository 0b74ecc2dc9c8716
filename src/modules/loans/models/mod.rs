mod loan;

pub use loan::{Loan, LoanStatus, LoanTerms};
