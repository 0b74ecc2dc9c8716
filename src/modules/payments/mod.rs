// Payments module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewPayment, Payment, PaymentType};
pub use repositories::PaymentRepository;
pub use services::{PaymentResult, PaymentService};
