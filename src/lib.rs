//! LoanLedger loan accounting service
//!
//! Creates simple-interest loans with equal monthly installments, records
//! payments against them, and derives balances, ledgers and per-customer
//! overviews from the recorded payment history.

pub mod config;
pub mod core;
pub mod gateway;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use gateway::{InMemoryGateway, MySqlGateway};
pub use modules::ledger;
pub use modules::loans;
pub use modules::overview;
pub use modules::payments;
