//! Repository gateway implementations
//!
//! `MySqlGateway` is the production store; `InMemoryGateway` backs tests.

mod memory;
mod mysql;

pub use memory::InMemoryGateway;
pub use mysql::MySqlGateway;
