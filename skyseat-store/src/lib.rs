pub mod app_config;
pub mod flight_repo;

pub use flight_repo::InMemoryFlightCatalog;
