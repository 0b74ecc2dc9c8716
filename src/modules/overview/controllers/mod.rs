pub mod overview_controller;

pub use overview_controller::{configure, get_overview, LoanSummaryResponse, OverviewResponse};
