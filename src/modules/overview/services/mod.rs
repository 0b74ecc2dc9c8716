pub mod overview_builder;
pub mod overview_service;

pub use overview_builder::OverviewBuilder;
pub use overview_service::OverviewService;
