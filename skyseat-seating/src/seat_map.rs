use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Occupancy, SeatNumber};

/// Soft seating preferences a traveler can ask for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SeatPreference {
    Window,
    ExtraLegroom,
    ExitProximity,
}

impl SeatPreference {
    pub const ALL: [SeatPreference; 3] = [
        SeatPreference::Window,
        SeatPreference::ExtraLegroom,
        SeatPreference::ExitProximity,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Business,
    Economy,
}

/// Inclusive seat range priced as business class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessZone {
    pub first: SeatNumber,
    pub last: SeatNumber,
}

/// Raw, unvalidated seat map as it appears in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMapConfig {
    pub seat_count: u32,
    pub row_width: u32,
    pub business_zone: BusinessZone,
    #[serde(default)]
    pub window_seats: BTreeSet<SeatNumber>,
    #[serde(default)]
    pub extra_legroom_seats: BTreeSet<SeatNumber>,
    #[serde(default)]
    pub exit_proximity_seats: BTreeSet<SeatNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatMapError {
    #[error("Seat map must contain at least one seat")]
    EmptyCabin,

    #[error("Row width must be at least one seat")]
    ZeroRowWidth,

    #[error("Business zone {first}-{last} is not a range within 1-{seat_count}")]
    InvalidBusinessZone {
        first: SeatNumber,
        last: SeatNumber,
        seat_count: u32,
    },

    #[error("{preference:?} seat {seat} is outside 1-{seat_count}")]
    SeatOutOfRange {
        preference: SeatPreference,
        seat: SeatNumber,
        seat_count: u32,
    },
}

/// Validated, immutable seating chart for one aircraft type.
///
/// Seats are numbered `1..=seat_count` front to back, `row_width` seats per
/// physical row. The three preference sets are always subsets of the cabin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeatMapConfig", into = "SeatMapConfig")]
pub struct SeatMap {
    seat_count: u32,
    row_width: u32,
    business_zone: BusinessZone,
    window_seats: BTreeSet<SeatNumber>,
    extra_legroom_seats: BTreeSet<SeatNumber>,
    exit_proximity_seats: BTreeSet<SeatNumber>,
}

impl TryFrom<SeatMapConfig> for SeatMap {
    type Error = SeatMapError;

    fn try_from(config: SeatMapConfig) -> Result<Self, Self::Error> {
        if config.seat_count == 0 {
            return Err(SeatMapError::EmptyCabin);
        }
        if config.row_width == 0 {
            return Err(SeatMapError::ZeroRowWidth);
        }

        let BusinessZone { first, last } = config.business_zone;
        if first == 0 || first > last || last > config.seat_count {
            return Err(SeatMapError::InvalidBusinessZone {
                first,
                last,
                seat_count: config.seat_count,
            });
        }

        let sets = [
            (SeatPreference::Window, &config.window_seats),
            (SeatPreference::ExtraLegroom, &config.extra_legroom_seats),
            (SeatPreference::ExitProximity, &config.exit_proximity_seats),
        ];
        for (preference, seats) in sets {
            if let Some(&seat) = seats.iter().find(|&&s| s == 0 || s > config.seat_count) {
                return Err(SeatMapError::SeatOutOfRange {
                    preference,
                    seat,
                    seat_count: config.seat_count,
                });
            }
        }

        Ok(Self {
            seat_count: config.seat_count,
            row_width: config.row_width,
            business_zone: config.business_zone,
            window_seats: config.window_seats,
            extra_legroom_seats: config.extra_legroom_seats,
            exit_proximity_seats: config.exit_proximity_seats,
        })
    }
}

impl From<SeatMap> for SeatMapConfig {
    fn from(map: SeatMap) -> Self {
        Self {
            seat_count: map.seat_count,
            row_width: map.row_width,
            business_zone: map.business_zone,
            window_seats: map.window_seats,
            extra_legroom_seats: map.extra_legroom_seats,
            exit_proximity_seats: map.exit_proximity_seats,
        }
    }
}

impl SeatMap {
    /// The 60-seat, 4-abreast layout: business rows 1-3, exit rows at the
    /// front, over the wing (seats 29-32) and at the rear.
    pub fn standard() -> Self {
        let seat_count = 60;
        let row_width = 4;

        Self {
            seat_count,
            row_width,
            business_zone: BusinessZone { first: 1, last: 12 },
            window_seats: (1..=seat_count)
                .filter(|s| s % row_width == 1 || s % row_width == 0)
                .collect(),
            extra_legroom_seats: (1..=12).chain(29..=32).collect(),
            exit_proximity_seats: (1..=4).chain(29..=32).chain(57..=60).collect(),
        }
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_count
    }

    pub fn row_width(&self) -> u32 {
        self.row_width
    }

    pub fn business_zone(&self) -> RangeInclusive<SeatNumber> {
        self.business_zone.first..=self.business_zone.last
    }

    /// Every seat id in the cabin, ascending
    pub fn seats(&self) -> RangeInclusive<SeatNumber> {
        1..=self.seat_count
    }

    pub fn contains(&self, seat: SeatNumber) -> bool {
        self.seats().contains(&seat)
    }

    pub fn is_business(&self, seat: SeatNumber) -> bool {
        self.business_zone().contains(&seat)
    }

    pub fn cabin_class(&self, seat: SeatNumber) -> CabinClass {
        if self.is_business(seat) {
            CabinClass::Business
        } else {
            CabinClass::Economy
        }
    }

    /// 1-based physical row of a seat
    pub fn row_of(&self, seat: SeatNumber) -> u32 {
        seat.saturating_sub(1) / self.row_width + 1
    }

    pub fn preference_seats(&self, preference: SeatPreference) -> &BTreeSet<SeatNumber> {
        match preference {
            SeatPreference::Window => &self.window_seats,
            SeatPreference::ExtraLegroom => &self.extra_legroom_seats,
            SeatPreference::ExitProximity => &self.exit_proximity_seats,
        }
    }

    pub fn matches(&self, seat: SeatNumber, preference: SeatPreference) -> bool {
        self.preference_seats(preference).contains(&seat)
    }

    /// Preferences a seat satisfies, in `SeatPreference::ALL` order
    pub fn features(&self, seat: SeatNumber) -> Vec<SeatPreference> {
        SeatPreference::ALL
            .into_iter()
            .filter(|&p| self.matches(seat, p))
            .collect()
    }

    /// Free seats in ascending order. Booked ids outside the cabin are ignored.
    pub fn available(&self, occupancy: &Occupancy) -> Vec<SeatNumber> {
        self.seats().filter(|s| !occupancy.contains(s)).collect()
    }
}
