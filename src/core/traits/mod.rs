pub mod repository;

pub use repository::RepositoryGateway;
