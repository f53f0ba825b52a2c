use async_trait::async_trait;
use crate::flight::Flight;
use crate::CoreResult;

/// Source of flight records and their booked seats
#[async_trait]
pub trait FlightCatalog: Send + Sync {
    async fn list_flights(&self) -> CoreResult<Vec<Flight>>;

    /// `Ok(None)` when no flight has this id
    async fn get_flight(&self, id: i64) -> CoreResult<Option<Flight>>;
}
