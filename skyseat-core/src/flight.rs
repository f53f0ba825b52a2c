use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use skyseat_seating::{Occupancy, SeatPrices};

/// Flight record as served by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub departure: String,
    pub destination: String,
    pub flight_date: NaiveDate,
    /// Free text such as "2h 30m"
    pub flight_duration: String,
    #[serde(default)]
    pub stopover: Option<String>,
    /// Economy fare per seat, minor units
    pub economy_price: i32,
    /// Business fare per seat, minor units
    pub business_price: i32,
    #[serde(default)]
    pub booked_seats: Occupancy,
}

impl Flight {
    pub fn duration_minutes(&self) -> u32 {
        parse_duration_minutes(&self.flight_duration)
    }

    pub fn seat_prices(&self) -> SeatPrices {
        SeatPrices {
            economy: self.economy_price,
            business: self.business_price,
        }
    }
}

fn hours_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)h").expect("valid hours pattern"))
}

fn minutes_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)m").expect("valid minutes pattern"))
}

/// Total minutes in a duration like "2h 30m". A missing part counts as zero;
/// durations beyond `u32::MAX` minutes saturate.
pub fn parse_duration_minutes(duration: &str) -> u32 {
    let capture = |pattern: &Regex| {
        pattern
            .captures(duration)
            // only overflow can fail a run of digits
            .map(|c| c[1].parse::<u32>().unwrap_or(u32::MAX))
            .unwrap_or(0)
    };

    capture(hours_pattern())
        .saturating_mul(60)
        .saturating_add(capture(minutes_pattern()))
}
