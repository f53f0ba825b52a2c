pub mod flight;
pub mod search;
pub mod repository;

pub use flight::Flight;
pub use search::FlightFilter;
pub use repository::FlightCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
