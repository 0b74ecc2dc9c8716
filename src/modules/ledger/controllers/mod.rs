pub mod ledger_controller;

pub use ledger_controller::{configure, get_ledger, LedgerResponse, TransactionResponse};
