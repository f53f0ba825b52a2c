use std::sync::Arc;
use skyseat_core::FlightCatalog;
use skyseat_seating::SeatAllocator;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn FlightCatalog>,
    pub allocator: Arc<SeatAllocator>,
    /// CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
}
