use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::seat_map::{CabinClass, SeatMap};
use crate::SeatNumber;

/// Per-seat fares of one flight, in minor currency units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPrices {
    pub economy: i32,
    pub business: i32,
}

impl SeatPrices {
    pub fn for_cabin(&self, cabin: CabinClass) -> i32 {
        match cabin {
            CabinClass::Business => self.business,
            CabinClass::Economy => self.economy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPriceLine {
    pub seat: SeatNumber,
    pub cabin: CabinClass,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub lines: Vec<SeatPriceLine>,
    pub total: i64,
}

/// Sum of seat fares: seats inside `business_zone` at the business price,
/// all others at the economy price.
pub fn total_price(
    seats: &[SeatNumber],
    business_zone: RangeInclusive<SeatNumber>,
    economy_price: i32,
    business_price: i32,
) -> i64 {
    seats
        .iter()
        .map(|seat| {
            if business_zone.contains(seat) {
                business_price as i64
            } else {
                economy_price as i64
            }
        })
        .sum()
}

/// One priced line per seat, in selection order
pub fn price_breakdown(seat_map: &SeatMap, seats: &[SeatNumber], prices: SeatPrices) -> PriceBreakdown {
    let lines: Vec<SeatPriceLine> = seats
        .iter()
        .map(|&seat| {
            let cabin = seat_map.cabin_class(seat);
            SeatPriceLine {
                seat,
                cabin,
                amount: prices.for_cabin(cabin),
            }
        })
        .collect();

    let total = total_price(seats, seat_map.business_zone(), prices.economy, prices.business);

    PriceBreakdown { lines, total }
}
