mod loan_repository;

pub use loan_repository::LoanRepository;
