use actix_web::web;

use crate::middleware::json_config;

pub mod customers;
pub mod health;
pub mod ledger;
pub mod loans;
pub mod overview;
pub mod payments;

/// Register every HTTP route of the service
///
/// Health checks live at the root; the loan API is versioned under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::controllers::configure(cfg);

    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .configure(loans::controllers::configure)
            .configure(payments::controllers::configure)
            .configure(ledger::controllers::configure)
            .configure(overview::controllers::configure),
    );
}
