//! Seat allocation for a single aircraft cabin: the seat map, the
//! recommendation engine, manual seat selection and seat pricing.

use std::collections::BTreeSet;

pub mod seat_map;
pub mod allocator;
pub mod selection;
pub mod pricing;

/// Seat id, 1-based, ascending from the front of the cabin.
pub type SeatNumber = u32;

/// Seats already booked on a flight.
pub type Occupancy = BTreeSet<SeatNumber>;

pub use seat_map::{BusinessZone, CabinClass, SeatMap, SeatMapConfig, SeatMapError, SeatPreference};
pub use allocator::{recommend, AllocationError, AllocationStrategy, PreferenceRequest, Recommendation, SeatAllocator};
pub use selection::{toggle_seat, SeatSelection};
pub use pricing::{price_breakdown, total_price, PriceBreakdown, SeatPriceLine, SeatPrices};
