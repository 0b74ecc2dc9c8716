// Overview module: per-customer aggregation across loans

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{LoanSummary, OverviewView};
pub use services::{OverviewBuilder, OverviewService};
