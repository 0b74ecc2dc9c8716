// Customers module

pub mod models;
pub mod repositories;

pub use models::Customer;
pub use repositories::CustomerRepository;
