mod overview;

pub use overview::{LoanSummary, OverviewView};
