// Ledger module: per-loan statements

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{LedgerTransaction, LedgerView};
pub use services::{LedgerBuilder, LedgerService};
