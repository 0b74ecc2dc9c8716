pub mod ledger_builder;
pub mod ledger_service;

pub use ledger_builder::LedgerBuilder;
pub use ledger_service::LedgerService;
