mod ledger;

pub use ledger::{LedgerTransaction, LedgerView};
