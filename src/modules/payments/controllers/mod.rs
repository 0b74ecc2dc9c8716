pub mod payment_controller;

pub use payment_controller::{configure, record_payment, PaymentResponse, RecordPaymentRequest};
